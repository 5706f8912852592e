use num_bigint::BigUint;

use crate::equation::{Equation, EquationError, parse_equation, parse_equations};

#[test]
fn test_equation_requires_operands() {
    let result = Equation::new(BigUint::from(5u32), Vec::new());
    assert_eq!(result, Err(EquationError::MalformedEquation));
}

#[test]
fn test_gap_count() {
    let single = Equation::from_u64(7, &[7]);
    assert!(single.is_ok());
    if let Ok(equation) = single {
        assert_eq!(equation.gap_count(), 0);
    }

    let triple = Equation::from_u64(26, &[3, 8, 2]);
    assert!(triple.is_ok());
    if let Ok(equation) = triple {
        assert_eq!(equation.gap_count(), 2);
    }
}

#[test]
fn test_parse_equation() {
    let result = parse_equation("190: 10 19");
    assert_eq!(result, Equation::from_u64(190, &[10, 19]));
}

#[test]
fn test_parse_equation_tolerates_whitespace() {
    let result = parse_equation("  3267 :  81   40 27  ");
    assert_eq!(result, Equation::from_u64(3267, &[81, 40, 27]));
}

#[test]
fn test_parse_equation_large_target() {
    let result = parse_equation("123456789012345678901234567890: 1 2");
    assert!(result.is_ok());
    if let Ok(equation) = result {
        assert_eq!(equation.target().to_string(), "123456789012345678901234567890");
    }
}

#[test]
fn test_parse_equation_errors() {
    assert_eq!(
        parse_equation("12 3 4"),
        Err(EquationError::MissingSeparator("12 3 4".to_string()))
    );
    assert_eq!(
        parse_equation("abc: 1"),
        Err(EquationError::InvalidNumber("abc".to_string()))
    );
    assert_eq!(
        parse_equation("10: 1 -2"),
        Err(EquationError::InvalidNumber("-2".to_string()))
    );
    assert_eq!(parse_equation("7:"), Err(EquationError::MalformedEquation));
    assert_eq!(
        parse_equation(": 1 2"),
        Err(EquationError::InvalidNumber(String::new()))
    );
}

#[test]
fn test_parse_equations_skips_blank_lines() {
    let input = "190: 10 19\n\n3267: 81 40 27\n";
    let result = parse_equations(input);
    assert!(result.is_ok());
    if let Ok(equations) = result {
        assert_eq!(equations.len(), 2);
        assert_eq!(equations[1].operands().len(), 3);
    }
}

#[test]
fn test_parse_equations_reports_line_number() {
    let input = "190: 10 19\n\n83: 17 x5\n";
    let result = parse_equations(input);
    assert_eq!(
        result,
        Err(EquationError::AtLine {
            line: 3,
            source: Box::new(EquationError::InvalidNumber("x5".to_string())),
        })
    );

    if let Err(err) = parse_equations(input) {
        assert_eq!(err.to_string(), "Line 3: Not a non-negative decimal integer: 'x5'");
    }
}
