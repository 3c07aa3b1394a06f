use std::fs::{self};

use fieldenum::{
    Value, assign, evaluate,
    generator::{dynamic::DynamicEnum, field::FieldType},
    interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (kind, layout)) in extract_layout_blocks(&content).into_iter().enumerate() {
            count += 1;
            let result = DynamicEnum::parse(kind, &layout).and_then(|mut target| {
                                                                assign(&mut target, vec![])
                                                            });
            if let Err(e) = result {
                panic!("Layout example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       layout,
                       e);
            }
        }
    }

    assert!(count > 0, "No layout examples found in book/src");
}

/// Collects the ```` ```fieldenum <type> ```` blocks of a markdown file.
fn extract_layout_blocks(content: &str) -> Vec<(FieldType, String)> {
    let mut blocks = Vec::new();
    let mut kind = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if kind.is_none()
           && let Some(info) = trimmed.strip_prefix("```fieldenum")
        {
            let name = info.trim();
            kind = Some(if name.is_empty() { FieldType::I64 } else { name.parse().unwrap() });
            buf.clear();
            continue;
        }
        if trimmed.starts_with("```")
           && let Some(k) = kind.take()
        {
            blocks.push((k, buf.clone()));
            continue;
        }
        if kind.is_some() {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: Value) {
    match evaluate(src) {
        Ok(value) => assert!(value.bit_eq(&expected),
                             "{src}: got {value:?}, expected {expected:?}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_complex_near(src: &str, real: f64, imaginary: f64) {
    match evaluate(src) {
        Ok(Value::Complex(c)) => assert!((c.real - real).abs() < 1e-12
                                         && (c.imaginary - imaginary).abs() < 1e-12,
                                         "{src}: got {c:?}, expected {real}{imaginary:+}i"),
        other => panic!("Expression {src} gave {other:?}, expected a complex number"),
    }
}

fn assert_failure(src: &str, message: &str) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

#[test]
fn literals() {
    assert_value("42", Value::Int(42));
    assert_value("1_000", Value::Int(1000));
    assert_value("0x2A", Value::Int(42));
    assert_value("0o52", Value::Int(42));
    assert_value("052", Value::Int(42));
    assert_value("0b101010", Value::Int(42));
    assert_value("2.5", Value::Float(2.5));
    assert_value(".5", Value::Float(0.5));
    assert_value("1e3", Value::Float(1000.0));
    assert_value("2i", Value::Complex(ComplexNumber::new(0.0, 2.0)));
    assert_value("9223372036854775808", Value::Float(9_223_372_036_854_775_808.0));
    assert_value("\"a\\tb\"", Value::Str("a\tb".to_string()));
}

#[test]
fn constants_and_iota() {
    assert_value("pi", Value::Float(std::f64::consts::PI));
    assert_value("Phi", Value::Float(1.618_033_988_749_895));
    assert_value("e", Value::Float(std::f64::consts::E));
    assert_value("i*i", Value::Complex(ComplexNumber::new(-1.0, 0.0)));
    assert_value("Inf", Value::Float(f64::INFINITY));
    assert!(evaluate("NaN").unwrap().is_nan());
    assert_value("iota", Value::Int(0));

    let context = Context::with_iota(7);
    assert_eq!(context.evaluate("iota * 2 + 1").unwrap(), Value::Int(15));
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", Value::Int(7));
    assert_value("(1 + 2) * 3", Value::Int(9));
    assert_value("1 << 2 + 1", Value::Int(5));
    assert_value("1 + 2 << 3", Value::Int(17));
    assert_value("10 - 4 - 3", Value::Int(3));
    assert_value("-2 * -3", Value::Int(6));
    assert_value("^0", Value::Int(-1));
    assert_value("+-+1", Value::Int(-1));
}

#[test]
fn numeric_promotion() {
    assert_value("1 + 0.5", Value::Float(1.5));
    assert_value("0.5 + 1", Value::Float(1.5));
    assert_value("2 * 1i", Value::Complex(ComplexNumber::new(0.0, 2.0)));
    assert_value("1i * 2", Value::Complex(ComplexNumber::new(0.0, 2.0)));
    assert_value("1.5 + 1i", Value::Complex(ComplexNumber::new(1.5, 1.0)));
    assert_value("7 / 2", Value::Int(3));
    assert_value("-7 / 2", Value::Int(-3));
    assert_value("7 / 2.0", Value::Float(3.5));
}

#[test]
fn integer_overflow_promotes_to_float() {
    assert_value("9223372036854775807 + 1", Value::Float(9_223_372_036_854_775_808.0));
    assert_value("-9223372036854775807 - 2", Value::Float(-9_223_372_036_854_775_808.0));
    assert_value("4294967296 * 4294967296", Value::Float(18_446_744_073_709_551_616.0));
    assert_value("pow(2, 62)", Value::Int(1 << 62));
    assert_value("pow(2, 100)", Value::Float(1.267_650_600_228_229_4e30));
}

#[test]
fn division_by_zero() {
    assert!(evaluate("0/0").unwrap().is_nan());
    assert_value("5/0", Value::Float(f64::INFINITY));
    assert_value("-5/0", Value::Float(f64::NEG_INFINITY));
    assert_value("1.0/0", Value::Float(f64::INFINITY));
    assert!(evaluate("5 % 0").unwrap().is_nan());
}

#[test]
fn complex_division_by_zero() {
    assert_value("(1+2i)/0", Value::Complex(ComplexNumber::new(f64::INFINITY, f64::INFINITY)));
    assert_value("(1+1i)/(1-1i)", Value::Complex(ComplexNumber::new(0.0, 1.0)));

    let Ok(Value::Complex(c)) = evaluate("(-1+0i)/0") else {
        panic!("(-1+0i)/0 is not complex");
    };
    assert_eq!(c.real, f64::NEG_INFINITY);
    assert!(c.imaginary.is_nan());

    let Ok(Value::Complex(c)) = evaluate("1i/0i") else {
        panic!("1i/0i is not complex");
    };
    assert!(c.real.is_nan());
    assert_eq!(c.imaginary, f64::INFINITY);
}

#[test]
fn modulo() {
    assert_value("7 % 3", Value::Int(1));
    assert_value("-7 % 3", Value::Int(-1));
    assert_value("7.5 % 2", Value::Float(1.5));
    assert_failure("1i % 2",
                   "use operator \"%\" on unsupported type for (complex128)%(int64) with expression \"1i % 2\"");
}

#[test]
fn bitwise_operators() {
    assert_value("6 & 3", Value::Int(2));
    assert_value("6 | 3", Value::Int(7));
    assert_value("6 ^ 3", Value::Int(5));
    assert_value("6 &^ 3", Value::Int(4));
    assert_value("1 << 10", Value::Int(1024));
    assert_value("-16 >> 2", Value::Int(-4));
    assert_value("1 << 64", Value::Int(0));
    assert_failure("1 << -1",
                   "use operator \"<<\" on unsupported second value for (1)<<(-1) with expression \"1 << -1\"");
    assert_failure("1.5 & 1",
                   "use operator \"&\" on unsupported type for (float64)&(int64) with expression \"1.5 & 1\"");
}

#[test]
fn comparison_and_logic_are_unsupported() {
    assert_failure("1 < 2", "unsupported operator \"<\" with expression \"1 < 2\"");
    assert_failure("1 == 1", "unsupported operator \"==\" with expression \"1 == 1\"");
    assert_failure("!1", "unsupported operator \"!\" with expression \"!1\"");
}

#[test]
fn builtin_functions() {
    assert_value("pow(2, 10)", Value::Int(1024));
    assert_value("pow(2, -1)", Value::Float(0.5));
    assert_value("sqrt(16)", Value::Float(4.0));
    assert!(evaluate("sqrt(-4)").unwrap().is_nan());
    assert_value("abs(-3)", Value::Int(3));
    assert_value("abs(-2.5)", Value::Float(2.5));
    assert_value("abs(3+4i)", Value::Float(5.0));
    assert_value("int(2.9)", Value::Int(2));
    assert_value("float(3)", Value::Float(3.0));
    assert_value("complex(1, 2)", Value::Complex(ComplexNumber::new(1.0, 2.0)));
    assert_value("real(1+2i)", Value::Float(1.0));
    assert_value("imag(1+2i)", Value::Float(2.0));
    assert_value("exp(0)", Value::Float(1.0));
    assert_value("log(1)", Value::Float(0.0));
    assert_value("log10(100)", Value::Float(2.0));
    assert_value("sin(0)", Value::Float(0.0));
    assert_value("cos(0)", Value::Float(1.0));
}

#[test]
fn inverse_functions() {
    assert_complex_near("asin(2+0i)", 1.570_796_326_794_896_6, 1.316_957_896_924_816_6);
    assert_complex_near("acos(2+0i)", 0.0, -1.316_957_896_924_816_6);
    assert_complex_near("atan(1+1i)", 1.017_221_967_897_851_4, 0.402_359_478_108_525_07);
    assert_complex_near("asinh(2i)", 1.316_957_896_924_816_6, 1.570_796_326_794_896_6);
    assert_complex_near("acosh(2+0i)", 1.316_957_896_924_816_6, 0.0);
    assert_complex_near("atanh(1i)", 0.0, std::f64::consts::FRAC_PI_4);
    assert_value("acosh(0i)", Value::Complex(ComplexNumber::new(0.0, std::f64::consts::FRAC_PI_2)));

    assert_value("atanh(1)", Value::Float(f64::INFINITY));
    assert!(evaluate("asin(2)").unwrap().is_nan());
    assert!(evaluate("acosh(0)").unwrap().is_nan());
}

#[test]
fn min_and_max() {
    assert_value("max(1, 2.5, 2)", Value::Float(2.5));
    assert_value("min(3, 1, 2)", Value::Int(1));
    assert_value("max(NaN, 1, 2)", Value::Int(2));
    assert!(evaluate("max(NaN, NaN)").unwrap().is_nan());
    assert_failure("max(1, 1i)",
                   "call function max(int64 complex128) on unsupported type with expression \"max(1, 1i)\"");
}

#[test]
fn function_errors() {
    assert_failure("unknown(1)",
                   "call non-existed function \"unknown\" with expression \"unknown(1)\"");
    assert_failure("1 + pow(2)",
                   "call function pow on too few arguments: expected exactly 2, found 1 with expression \"pow(2)\"");
    assert_failure("pow(1, 2, 3)",
                   "call function pow on too many arguments: expected exactly 2, found 3 with expression \"pow(1, 2, 3)\"");
    assert_failure("max()",
                   "call function max on too few arguments: expected at least 1, found 0 with expression \"max()\"");
}

#[test]
fn unknown_function_is_reported_before_its_arguments() {
    assert_failure("nope(missing)",
                   "call non-existed function \"nope\" with expression \"nope(missing)\"");
    assert_failure("pow(missing, 2)",
                   "unsupported identifier \"missing\" with expression \"missing\"");
}

#[test]
fn operator_errors_span_the_whole_operation() {
    assert_failure("2 * (1 + \"a\")",
                   "use operator \"+\" on unsupported type for (int64)+(string) with expression \"1 + \"a\"\"");
    assert_failure("-\"a\"",
                   "use operator \"-\" on unsupported type for -(string) with expression \"-\"a\"\"");
}

#[test]
fn parse_errors() {
    assert_failure("1 +", "invalid expression \"1 +\": unexpected end of expression");
    assert_failure("(1", "invalid expression \"(1\": expected closing parenthesis ')' at offset 0");
    assert_failure("1 2",
                   "invalid expression \"1 2\": extra tokens after expression starting with \"2\" at offset 2");
    assert_failure("1 $ 2", "invalid expression \"1 $ 2\": unexpected token \"$\" at offset 2");
    assert!(evaluate("").is_err());
}

#[test]
fn custom_values_resolve_after_builtins() {
    let mut context = Context::with_iota(2);
    context.define_value("step", Value::Int(5)).unwrap();
    assert_eq!(context.evaluate("iota * step").unwrap(), Value::Int(10));
    assert!(context.define_value("e", Value::Int(1)).is_err());
    assert!(context.define_value("step", Value::Int(1)).is_err());
}
