//! Syntactic identity folding for generated expressions

use once_cell::sync::Lazy;
use regex::Regex;

/// Operand of a foldable identity: a label, possibly several words, with any
/// leading negations
const OPERAND: &str = r"(¬*[A-Za-z0-9_]+(?: [A-Za-z0-9_]+)*)";

/// Start of an operand: string start, an opening parenthesis or an operator.
/// A negated constant or a later word of a label never qualifies.
const LEFT: &str = r"(^|\(|[•+⊕] )";

/// End of a trailing constant, so `1` is not read off a label like `1 Bit`
const RIGHT: &str = r"($|\)| [•+⊕])";

/// Identities applied in order, each exactly once over the whole string
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (format!(r"{}{} • 1{}", LEFT, OPERAND, RIGHT), "${1}${2}${3}"),
        (format!(r"{}1 • {}", LEFT, OPERAND), "${1}${2}"),
        (format!(r"{}{} • 0{}", LEFT, OPERAND, RIGHT), "${1}0${3}"),
        (format!(r"{}0 • {}", LEFT, OPERAND), "${1}0"),
        (format!(r"{}{} \+ 1{}", LEFT, OPERAND, RIGHT), "${1}1${3}"),
        (format!(r"{}1 \+ {}", LEFT, OPERAND), "${1}1"),
        (format!(r"{}{} \+ 0{}", LEFT, OPERAND, RIGHT), "${1}${2}${3}"),
        (format!(r"{}0 \+ {}", LEFT, OPERAND), "${1}${2}"),
        (r"¬¬([A-Za-z0-9_]+)".to_string(), "${1}"),
        // A folded gate leaves its survivor in parentheses; keep them after ¬
        (format!(r"(^|[^¬])\({}\)", OPERAND), "${1}${2}"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(&pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Fold `X•1`, `X•0`, `X+1`, `X+0` and `¬¬X` in a single pass, then drop
/// parentheses left around a lone operand.
///
/// A rewrite that exposes a new match is not revisited.
pub fn simplify_expression(expression: &str) -> String {
    RULES.iter().fold(expression.to_string(), |current, (pattern, replacement)| {
        pattern.replace_all(&current, *replacement).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(RULES.len(), 10);
    }

    #[test]
    fn test_and_identities() {
        assert_eq!(simplify_expression("X • 1"), "X");
        assert_eq!(simplify_expression("1 • X"), "X");
        assert_eq!(simplify_expression("(A • 0)"), "0");
        assert_eq!(simplify_expression("0 • B_2"), "0");
    }

    #[test]
    fn test_or_identities() {
        assert_eq!(simplify_expression("(A + 1)"), "1");
        assert_eq!(simplify_expression("1 + A"), "1");
        assert_eq!(simplify_expression("(A + 0)"), "A");
        assert_eq!(simplify_expression("0 + A"), "A");
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(simplify_expression("¬¬A"), "A");
        assert_eq!(simplify_expression("¬¬(A • B)"), "¬¬(A • B)");
    }

    #[test]
    fn test_negated_operand_is_kept_whole() {
        assert_eq!(simplify_expression("¬A • 1"), "¬A");
        assert_eq!(simplify_expression("¬A • 0"), "0");
    }

    #[test]
    fn test_multi_digit_constants_untouched() {
        assert_eq!(simplify_expression("A • 10"), "A • 10");
        assert_eq!(simplify_expression("S1 • B"), "S1 • B");
    }

    #[test]
    fn test_single_pass_only() {
        assert_eq!(simplify_expression("¬¬A • 1"), "A");
        assert_eq!(simplify_expression("(A • 0) + B"), "0 + B");
        assert_eq!(simplify_expression("¬¬1 • A"), "1 • A");
    }

    #[test]
    fn test_negated_constant_is_not_folded() {
        assert_eq!(simplify_expression("¬0 + B"), "¬0 + B");
        assert_eq!(simplify_expression("(1 • B)"), "B");
    }

    #[test]
    fn test_non_identities_untouched() {
        let expression = "((A • B) + (Cin • (A ⊕ B)))";
        assert_eq!(simplify_expression(expression), expression);
        assert_eq!(simplify_expression("[and-1] • 1"), "[and-1] • 1");
    }

    #[test]
    fn test_multi_word_labels_fold_whole() {
        assert_eq!(simplify_expression("(Input A • 0)"), "0");
        assert_eq!(simplify_expression("(Carry In + 1)"), "1");
        assert_eq!(simplify_expression("(Input A • 1)"), "Input A");
        assert_eq!(simplify_expression("(0 + Carry In)"), "Carry In");
        assert_eq!(simplify_expression("((Input A • 0) + Input B)"), "(0 + Input B)");
    }

    #[test]
    fn test_constant_word_inside_label_is_not_folded() {
        assert_eq!(simplify_expression("(A • 1 Bit)"), "(A • 1 Bit)");
        assert_eq!(simplify_expression("(Input 1 • B)"), "(Input 1 • B)");
        assert_eq!(simplify_expression("(Stage 0 + B)"), "(Stage 0 + B)");
    }

    #[test]
    fn test_parentheses_kept_after_negation() {
        assert_eq!(simplify_expression("¬(Input A + 0)"), "¬(Input A)");
        assert_eq!(simplify_expression("(A) + (B)"), "A + B");
    }
}
