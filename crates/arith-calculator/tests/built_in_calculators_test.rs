use std::collections::HashMap;

use arith_calculator::built_in::add::AddCalculator;
use arith_calculator::built_in::divide::DivideCalculator;
use arith_calculator::built_in::multiply::MultiplyCalculator;
use arith_calculator::built_in::subtract::SubtractCalculator;
use arith_calculator::plugin::{CalculationResult, CalculatorPlugin};
use arith_calculator::{Calculator, CalculatorError, DivisionMode, ErrorKind, Number};

fn calculate_with<C: CalculatorPlugin>(
    calculator: C,
    inputs: &[(&str, Number)],
) -> CalculationResult {
    let var_refs: HashMap<String, &Number> =
        inputs.iter().map(|(k, v)| (k.to_string(), v)).collect();
    calculator.calculate(&var_refs)
}

#[test]
fn add_calculator_works() {
    let result = calculate_with(
        AddCalculator,
        &[("a", Number::Float(10.0)), ("b", Number::Float(15.5))],
    );
    assert_eq!(result.unwrap().to_string(), 25.5.to_string());
}

#[test]
fn add_calculator_accepts_aliases() {
    let result = calculate_with(
        AddCalculator,
        &[("addend1", Number::Integer(2)), ("y", Number::Integer(3))],
    );
    assert_eq!(result.unwrap(), Number::Integer(5));
}

#[test]
fn subtract_calculator_works() {
    let result = calculate_with(
        SubtractCalculator,
        &[("minuend", Number::Integer(3)), ("subtrahend", Number::Integer(2))],
    );
    assert_eq!(result.unwrap(), Number::Integer(1));
}

#[test]
fn multiply_calculator_works() {
    let result = calculate_with(
        MultiplyCalculator,
        &[("a", Number::Float(2.0)), ("b", Number::Float(3.5))],
    );
    assert_eq!(result.unwrap().to_string(), (2.0 * 3.5).to_string());
}

#[test]
fn divide_calculator_works() {
    let result = calculate_with(
        DivideCalculator::default(),
        &[("dividend", Number::Integer(-4)), ("divisor", Number::Integer(-2))],
    );
    assert_eq!(result.unwrap(), Number::Integer(2));
}

#[test]
fn divide_calculator_rejects_zero_divisor() {
    let err = calculate_with(
        DivideCalculator::new(DivisionMode::Truncating),
        &[("a", Number::Integer(10)), ("b", Number::Float(0.0))],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err, CalculatorError::DivisionByZero { dividend: Number::Integer(10) });
}

#[test]
fn specific_name_wins_over_shared_alias() {
    let result = calculate_with(
        DivideCalculator::default(),
        &[
            ("dividend", Number::Integer(9)),
            ("a", Number::Integer(1)),
            ("b", Number::Integer(3)),
        ],
    );
    assert_eq!(result.unwrap(), Number::Integer(3));
}

#[test]
fn missing_operand_lists_tried_names() {
    let err = calculate_with(MultiplyCalculator, &[("a", Number::Integer(2))]).unwrap_err();
    match err {
        CalculatorError::MissingArgument { calculator, tried } => {
            assert_eq!(calculator, "multiply");
            assert_eq!(tried, vec!["multiplier", "b", "y", "value2"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn calculator_dispatches_by_name() {
    let calculator = Calculator::new();
    let (six, three) = (Number::Integer(6), Number::Integer(3));
    let args: HashMap<String, &Number> =
        [("a".to_string(), &six), ("b".to_string(), &three)].into_iter().collect();

    assert_eq!(calculator.calculate("add", &args).unwrap(), Number::Integer(9));
    assert_eq!(calculator.calculate("subtract", &args).unwrap(), Number::Integer(3));
    assert_eq!(calculator.calculate("multiply", &args).unwrap(), Number::Integer(18));
    assert_eq!(calculator.calculate("divide", &args).unwrap(), Number::Integer(2));
}

#[test]
fn operation_names_round_trip_through_dispatch() {
    let calculator = Calculator::new();
    let op = "/".parse().unwrap();
    assert_eq!(calculator.evaluate(op, 6, 2).unwrap(), Number::Integer(3));
    let err = calculator.evaluate(op, 6, 0).unwrap_err();
    assert!(err.to_string().contains("Cannot divide by zero"));
}
