//! Gatekit - command line front end
//!
//! Loads a circuit snapshot and prints its evaluation, truth table, boolean
//! expressions or structural diagnostics.

use chrono::{Local, NaiveTime};
use clap::{ArgAction, Parser, Subcommand};
use gatekit::nodes::catalogue;
use gatekit::presets::Preset;
use gatekit::snapshot::{load_circuit, save_circuit};
use gatekit::{
    has_cycles, Circuit, CircuitEngine, CircuitError, EngineConfig, ExpressionGenerator, Node, NodeState, Result,
    TruthTableGenerator,
};
use log::{debug, info, warn};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "gatekit")]
#[command(about = "Digital logic circuit evaluator", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the circuit and print every node's settled state
    Eval {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Time of day seen by binary clocks (defaults to local time)
        #[arg(short, long, value_name = "HH:MM:SS")]
        time: Option<String>,

        /// Sweep cap for feedback circuits
        #[arg(long, value_name = "N")]
        max_sweeps: Option<usize>,

        /// Print the evaluated nodes and run statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the truth table over all switch combinations
    Table {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Print a boolean expression for every observable output
    Expr {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Skip identity folding
        #[arg(long)]
        no_simplify: bool,

        #[arg(long)]
        json: bool,
    },
    /// Report feedback loops and edges the engine cannot use
    Check {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print or save a ready-made circuit
    Preset {
        /// Preset name
        #[arg(required_unless_present = "list")]
        name: Option<String>,

        /// List available presets
        #[arg(short, long)]
        list: bool,

        /// Write a snapshot file instead of printing JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List every node kind with its ports
    Kinds {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval {
            input,
            time,
            max_sweeps,
            json,
        } => {
            let circuit = load(&input)?;
            let now = match time {
                Some(time) => parse_time(&time)?,
                None => Local::now().time(),
            };
            let mut config = EngineConfig::default();
            if let Some(max_sweeps) = max_sweeps {
                config.max_sweeps = max_sweeps;
            }

            let (nodes, stats) = CircuitEngine::new(config).evaluate(&circuit.nodes, &circuit.edges, now);
            if json {
                let report = json!({ "nodes": nodes, "stats": stats });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            for node in &nodes {
                println!("{:<24} {:<18} {}", node.display_label(), node.kind.type_name(), describe(node));
            }
            println!();
            println!(
                "{} after {} sweep(s), {} state change(s)",
                if stats.converged { "Settled" } else { "Did not settle" },
                stats.sweeps,
                stats.state_changes
            );
        }
        Command::Table { input, json } => {
            let circuit = load(&input)?;
            let table = TruthTableGenerator::default().generate(&circuit.nodes, &circuit.edges, Local::now().time());
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
                return Ok(());
            }
            if table.is_empty() {
                println!("No truth table: the circuit needs at least one switch and one output");
                return Ok(());
            }

            println!("  {}", table.headers.join("\t"));
            for (index, row) in table.rows.iter().enumerate() {
                let marker = if table.current_row == Some(index) { '*' } else { ' ' };
                println!("{} {}", marker, row.join("\t"));
            }
        }
        Command::Expr {
            input,
            no_simplify,
            json,
        } => {
            let circuit = load(&input)?;
            let generator = if no_simplify {
                ExpressionGenerator::raw()
            } else {
                ExpressionGenerator::new()
            };
            let expressions = generator.generate(&circuit.nodes, &circuit.edges);
            if json {
                println!("{}", serde_json::to_string_pretty(&expressions)?);
                return Ok(());
            }
            for output in expressions.values() {
                println!("{} = {}", output.label, output.expression);
            }
        }
        Command::Check { input } => {
            let circuit = load(&input)?;
            let cyclic = has_cycles(&circuit.nodes, &circuit.edges);
            let (_, stats) = CircuitEngine::default().evaluate(&circuit.nodes, &circuit.edges, Local::now().time());

            println!("Feedback loops: {}", if cyclic { "yes" } else { "no" });
            println!("Dangling edges: {}", stats.dangling_edges);
            println!("Ignored edges:  {}", stats.ignored_edges);
            println!("Converged:      {} ({} sweeps)", stats.converged, stats.sweeps);
            for edge in circuit.dangling_edges() {
                warn!("Edge {} references a missing node ({} -> {})", edge.id, edge.source, edge.target);
            }
        }
        Command::Preset { name, list, output } => {
            if list {
                for preset in Preset::ALL {
                    println!("{:<18} {}", preset.name(), preset.description());
                }
                return Ok(());
            }
            let name = name.unwrap_or_default();
            let preset: Preset = name.parse()?;
            let circuit = preset.build()?;
            match output {
                Some(path) => {
                    save_circuit(&path, &circuit, preset.description())?;
                    info!("Wrote {} to {}", preset, path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&circuit)?),
            }
        }
        Command::Kinds { json } => {
            let entries = catalogue();
            if json {
                let kinds: Vec<_> = entries.iter().map(|entry| entry.summary()).collect();
                println!("{}", serde_json::to_string_pretty(&kinds)?);
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{:<18} {:<4} {:<20} {}",
                    entry.metadata.node_type,
                    entry.metadata.symbol,
                    entry.metadata.display_name,
                    entry.metadata.category.display_string()
                );
                println!("    in:   {}", entry.ports.input_names().join(", "));
                println!("    out:  {}", entry.ports.output_names().join(", "));
                println!("    tags: {}", entry.metadata.tags.join(", "));
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Circuit> {
    let circuit = load_circuit(path)?;
    info!(
        "Loaded {}: {} nodes, {} edges",
        path.display(),
        circuit.nodes.len(),
        circuit.edges.len()
    );
    Ok(circuit)
}

fn parse_time(text: &str) -> Result<NaiveTime> {
    debug!("Parsing clock time '{}'", text);
    NaiveTime::parse_from_str(text, "%H:%M:%S").map_err(|_| CircuitError::InvalidTime(text.to_string()))
}

fn bits(values: &[bool]) -> String {
    values.iter().map(|&v| if v { '1' } else { '0' }).collect()
}

fn flag(value: bool) -> u8 {
    value as u8
}

/// One-line summary of a node's settled state
fn describe(node: &Node) -> String {
    match &node.data {
        NodeState::Switch { state } | NodeState::Signal { state } => flag(*state).to_string(),
        NodeState::Adder { sum, carry } => format!("sum={} carry={}", flag(*sum), flag(*carry)),
        NodeState::Display { values, decimal, hex } => {
            format!("{} = {} (0x{})", bits(values), decimal, hex)
        }
        NodeState::MultiLed {
            pattern, active_count, ..
        } => format!("{} ({} lit)", pattern, active_count),
        NodeState::Comparator {
            input_a,
            input_b,
            equal,
            greater,
            less,
        } => format!(
            "a={} b={} equal={} greater={} less={}",
            input_a,
            input_b,
            flag(*equal),
            flag(*greater),
            flag(*less)
        ),
        NodeState::Encoder {
            outputs,
            encoded_value,
            valid,
            ..
        } => format!("out={} ({}) valid={}", bits(outputs), encoded_value, flag(*valid)),
        NodeState::Decoder {
            value,
            enable,
            outputs,
            ..
        } => format!("out={} value={} enable={}", bits(outputs), value, flag(*enable)),
        NodeState::Multiplexer {
            select_value,
            enable,
            output,
            ..
        } => format!("output={} select={} enable={}", flag(*output), select_value, flag(*enable)),
        NodeState::Clock {
            hours,
            minutes,
            seconds,
        } => format!("{}:{}:{}", bits(hours), bits(minutes), bits(seconds)),
    }
}
