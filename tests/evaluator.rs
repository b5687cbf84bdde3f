use std::collections::HashMap;

use intcalc::{
    ast::{BinaryOperation, Node, NodeTag},
    error::{ArithmeticFault, CalcError, RuntimeError},
    interpreter::{evaluator::Evaluator, session::Session},
    settings::Settings,
};
use num::BigInt;

fn eval(session: &mut Session, line: &str) -> BigInt {
    session.run_line(line)
           .unwrap_or_else(|e| panic!("failed to evaluate {line:?}: {e}"))
           .unwrap_or_else(|| panic!("{line:?} produced no value"))
}

fn eval_fresh(line: &str) -> BigInt {
    eval(&mut Session::default(), line)
}

fn eval_err(session: &mut Session, line: &str) -> CalcError {
    match session.run_line(line) {
        Ok(value) => panic!("{line:?} evaluated to {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    let cases = [("15 - 5 - 2", 8),
                 ("2 ** 2 ** 3", 256),
                 ("2 + 3 * 4", 14),
                 ("5 * 2 - 4", 6),
                 ("(2 + 3) * 4", 20),
                 ("100 / 10 / 5", 2),
                 ("2 * 3 ** 2", 18)];

    for (line, expected) in cases {
        assert_eq!(eval_fresh(line), BigInt::from(expected), "{line}");
    }
}

#[test]
fn unary_operations() {
    assert_eq!(eval_fresh("-2 + 3"), BigInt::from(1));
    assert_eq!(eval_fresh("-(-2)"), BigInt::from(2));
    assert_eq!(eval_fresh("- -2"), BigInt::from(2));
    assert_eq!(eval_fresh("+7"), BigInt::from(7));
    assert_eq!(eval_fresh("-2 ** 2"), BigInt::from(-4));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval_fresh("7 / 2"), BigInt::from(3));
    assert_eq!(eval_fresh("-7 / 2"), BigInt::from(-3));
    assert_eq!(eval_fresh("7 / -2"), BigInt::from(-3));
    assert_eq!(eval_fresh("-7 / -2"), BigInt::from(3));
}

#[test]
fn values_are_arbitrary_precision() {
    let expected: BigInt = "1606938044258990275541962092341162602522202993782792835301376".parse()
                                                                                          .unwrap();
    assert_eq!(eval_fresh("2 ** 200"), expected);

    assert_eq!(eval_fresh("123456789012345678901234567890 - 123456789012345678901234567889"),
               BigInt::from(1));
}

#[test]
fn zero_to_the_zero_is_one() {
    assert_eq!(eval_fresh("0 ** 0"), BigInt::from(1));
}

#[test]
fn declarations_bind_variables() {
    let mut session = Session::default();

    assert_eq!(session.run_line("let x = 5"), Ok(None));
    assert_eq!(eval(&mut session, "x + 1"), BigInt::from(6));

    assert_eq!(session.run_line("let x = x * 10"), Ok(None));
    assert_eq!(eval(&mut session, "x"), BigInt::from(50));
    assert_eq!(session.evaluator().variable("x"), Some(&BigInt::from(50)));
}

#[test]
fn sessions_do_not_share_bindings() {
    let mut first = Session::default();
    let mut second = Session::default();

    first.run_line("let a = 1").unwrap();
    assert!(matches!(eval_err(&mut second, "a"),
                     CalcError::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn undefined_variable() {
    let mut session = Session::default();
    assert_eq!(eval_err(&mut session, "y + 1"),
               CalcError::Runtime(RuntimeError::UndefinedVariable { name: "y".to_string() }));
}

#[test]
fn division_by_zero() {
    let mut session = Session::default();
    assert_eq!(eval_err(&mut session, "1 / 0"),
               CalcError::Runtime(RuntimeError::Arithmetic { source: ArithmeticFault::DivisionByZero }));
    assert_eq!(eval_err(&mut session, "1 / (2 - 2)"),
               CalcError::Runtime(RuntimeError::Arithmetic { source: ArithmeticFault::DivisionByZero }));
}

#[test]
fn unusable_exponents() {
    let mut session = Session::default();
    assert_eq!(eval_err(&mut session, "2 ** (0 - 1)"),
               CalcError::Runtime(RuntimeError::Arithmetic {
                   source: ArithmeticFault::NegativeExponent { exponent: "-1".to_string() },
               }));
    assert!(matches!(eval_err(&mut session, "2 ** 99999999999"),
                     CalcError::Runtime(RuntimeError::Arithmetic {
                         source: ArithmeticFault::ExponentTooLarge { .. },
                     })));
    assert_eq!(eval_err(&mut session, "10 ** 4000000000"),
               CalcError::Runtime(RuntimeError::Arithmetic {
                   source: ArithmeticFault::ResultTooLarge { bits:     4,
                                                             exponent: "4000000000".to_string(), },
               }));
    assert!(matches!(eval_err(&mut session, "(0 - 3) ** 3000000000"),
                     CalcError::Runtime(RuntimeError::Arithmetic {
                         source: ArithmeticFault::ResultTooLarge { .. },
                     })));
}

#[test]
fn trivial_bases_accept_any_exponent() {
    assert_eq!(eval_fresh("1 ** 99999999999999"), BigInt::from(1));
    assert_eq!(eval_fresh("0 ** 99999999999999"), BigInt::from(0));
    assert_eq!(eval_fresh("(0 - 1) ** 99999999999998"), BigInt::from(1));
    assert_eq!(eval_fresh("(0 - 1) ** 99999999999999999"), BigInt::from(-1));
    assert_eq!(eval_fresh("-1 ** 4000000000"), BigInt::from(-1));
}

#[test]
fn sessions_can_move_between_threads() {
    let mut session = Session::default();
    session.run_line("let x = 41").unwrap();

    let handle = std::thread::spawn(move || session.run_line("x + 1"));
    assert_eq!(handle.join().unwrap(), Ok(Some(BigInt::from(42))));
}

#[test]
fn failed_declaration_keeps_the_environment() {
    let mut session = Session::default();
    session.run_line("let x = 1").unwrap();

    eval_err(&mut session, "let x = 1 / 0");
    eval_err(&mut session, "let y = z");

    assert_eq!(session.evaluator().variable("x"), Some(&BigInt::from(1)));
    assert_eq!(session.evaluator().variable("y"), None);
    assert_eq!(session.evaluator().variables().count(), 1);
}

#[test]
fn initial_bindings() {
    let initial = HashMap::from([("base".to_string(), BigInt::from(10)),
                                 ("exp".to_string(), BigInt::from(3))]);
    let mut session = Session::new(&Settings::default(), initial);

    assert_eq!(eval(&mut session, "base ** exp"), BigInt::from(1000));
}

#[test]
fn blank_line_has_no_value() {
    let mut session = Session::default();
    assert_eq!(session.run_line(""), Ok(None));
    assert_eq!(session.run_line("   "), Ok(None));
}

#[test]
fn nested_assignment_is_rejected() {
    let mut evaluator = Evaluator::default();
    let tree = Node::binary(BinaryOperation::Plus,
                            Node::number("1"),
                            Node::assign("x", Node::number("2")));

    assert_eq!(evaluator.evaluate_line(&tree),
               Err(RuntimeError::UnsupportedOperation { tag: NodeTag::Assign }));
    assert_eq!(evaluator.variable("x"), None);
}

#[test]
fn malformed_number_leaf() {
    let mut evaluator = Evaluator::default();

    for repr in ["12x", "", "-3", "1 2"] {
        assert_eq!(evaluator.evaluate_line(&Node::number(repr)),
                   Err(RuntimeError::MalformedNumber { repr: repr.to_string() }),
                   "leaf {repr:?}");
    }
}

#[test]
fn leading_zeros_are_accepted() {
    assert_eq!(eval_fresh("007 + 0"), BigInt::from(7));
}

#[test]
fn evaluating_a_hand_built_tree() {
    let mut evaluator = Evaluator::new(HashMap::from([("n".to_string(), BigInt::from(4))]));
    let tree = Node::binary(BinaryOperation::Mult, Node::variable("n"), Node::number("25"));

    assert_eq!(evaluator.evaluate_line(&tree), Ok(Some(BigInt::from(100))));
}
