use fieldenum::{
    Error, Value, assign,
    error::{FieldError, FunctionError},
    field_enum,
    generator::{
        dynamic::DynamicEnum,
        field::{FieldDescriptor, FieldEnum, FieldType, FieldValue, Shape},
    },
    interpreter::value::complex::{Complex32, ComplexNumber},
    new, try_new, with_func, with_value, with_values,
};

macro_rules! counting_enum {
    ($name:ident: $ty:ty) => {
        field_enum! {
            #[derive(Debug, PartialEq)]
            struct $name: $ty {
                A,
                B,
                C = "3",
                D,
                E = "iota*iota",
                F,
            }
        }
    };
}

counting_enum!(IntEnum: i64);
counting_enum!(Int8Enum: i8);
counting_enum!(Int16Enum: i16);
counting_enum!(Int32Enum: i32);
counting_enum!(IsizeEnum: isize);
counting_enum!(Uint8Enum: u8);
counting_enum!(Uint16Enum: u16);
counting_enum!(Uint32Enum: u32);
counting_enum!(Uint64Enum: u64);
counting_enum!(UsizeEnum: usize);
counting_enum!(Float32Enum: f32);
counting_enum!(Float64Enum: f64);

field_enum! {
    #[derive(Debug, PartialEq)]
    struct StringEnum: String {
        A,
        B = "A",
        C = "",
        D = "1+2",
    }
}

field_enum! {
    #[derive(Debug, PartialEq)]
    struct Complex64Enum: Complex32 {
        A,
        B,
        C = "3",
        D,
        E = "iota+iota*i",
        F,
    }
}

field_enum! {
    #[derive(Debug, PartialEq)]
    struct Complex128Enum: ComplexNumber {
        A,
        B,
        C = "3",
        D,
        E = "iota+iota*i",
        F,
    }
}

field_enum! {
    #[derive(Debug, PartialEq)]
    struct ValuesEnum: i64 {
        A = "a",
        B = "b+1",
        C = "c+iota",
    }
}

field_enum! {
    #[derive(Debug, PartialEq)]
    struct FuncsEnum: i64 {
        A = "fa(0)",
        B = "fb(0)",
        C = "fc(iota)",
    }
}

field_enum! {
    #[derive(Debug)]
    struct NegativeEnum: u32 {
        A = "-1",
    }
}

fn int_argument(name: &str, args: &[Value]) -> Result<i64, FunctionError> {
    match args {
        [Value::Int(n)] => Ok(*n),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}

#[test]
fn signed_integer_fields() {
    macro_rules! check {
        ($name:ident) => {
            let got: $name = try_new(vec![]).unwrap();
            assert_eq!(got,
                       $name { A: 0,
                               B: 1,
                               C: 3,
                               D: 4,
                               E: 16,
                               F: 25 });
        };
    }
    check!(IntEnum);
    check!(Int8Enum);
    check!(Int16Enum);
    check!(Int32Enum);
    check!(IsizeEnum);
}

#[test]
fn unsigned_integer_fields() {
    macro_rules! check {
        ($name:ident) => {
            let got: $name = try_new(vec![]).unwrap();
            assert_eq!(got,
                       $name { A: 0,
                               B: 1,
                               C: 3,
                               D: 4,
                               E: 16,
                               F: 25 });
        };
    }
    check!(Uint8Enum);
    check!(Uint16Enum);
    check!(Uint32Enum);
    check!(Uint64Enum);
    check!(UsizeEnum);
}

#[test]
fn float_fields() {
    let got: Float32Enum = try_new(vec![]).unwrap();
    assert_eq!(got,
               Float32Enum { A: 0.0,
                             B: 1.0,
                             C: 3.0,
                             D: 4.0,
                             E: 16.0,
                             F: 25.0 });

    let got: Float64Enum = try_new(vec![]).unwrap();
    assert_eq!(got,
               Float64Enum { A: 0.0,
                             B: 1.0,
                             C: 3.0,
                             D: 4.0,
                             E: 16.0,
                             F: 25.0 });
}

#[test]
fn complex_fields() {
    let got: Complex128Enum = try_new(vec![]).unwrap();
    assert_eq!(got.C, ComplexNumber::new(3.0, 0.0));
    assert_eq!(got.D, ComplexNumber::new(4.0, 0.0));
    assert_eq!(got.E, ComplexNumber::new(4.0, 4.0));
    assert_eq!(got.F, ComplexNumber::new(5.0, 5.0));

    let got: Complex64Enum = try_new(vec![]).unwrap();
    assert_eq!(got.A, Complex32::new(0.0, 0.0));
    assert_eq!(got.E, Complex32::new(4.0, 4.0));
    assert_eq!(got.F, Complex32::new(5.0, 5.0));
}

#[test]
fn string_fields() {
    let got: StringEnum = try_new(vec![]).unwrap();
    assert_eq!(got,
               StringEnum { A: "A".to_string(),
                            B: "A".to_string(),
                            C: String::new(),
                            D: "1+2".to_string() });
}

#[test]
fn boxed_targets() {
    let got: Box<IntEnum> = try_new(vec![]).unwrap();
    assert_eq!(got.E, 16);

    let got: Box<StringEnum> = try_new(vec![]).unwrap();
    assert_eq!(got.A, "A");
}

#[test]
fn custom_values() {
    let got: ValuesEnum = try_new(vec![with_values([("a", 1), ("b", 2), ("c", 3)])]).unwrap();
    assert_eq!(got, ValuesEnum { A: 1, B: 3, C: 5 });
}

#[test]
fn missing_custom_value_is_error() {
    let err = try_new::<ValuesEnum>(vec![]).unwrap_err();
    assert_eq!(err.to_string(),
               "fieldenum: field \"A\": unsupported identifier \"a\" with expression \"a\"");
}

#[test]
fn custom_functions() {
    let options = vec![with_func("fa", |args: &[Value]| int_argument("fa", args).map(Value::Int)),
                       with_func("fb", |args: &[Value]| {
                           int_argument("fb", args).map(|n| Value::Int(n + 1))
                       }),
                       with_func("fc", |args: &[Value]| {
                           int_argument("fc", args).map(|n| Value::Int(n + 2))
                       }),];
    let got: FuncsEnum = try_new(options).unwrap();
    assert_eq!(got, FuncsEnum { A: 0, B: 1, C: 4 });
}

#[test]
fn missing_custom_function_is_error() {
    let err = try_new::<FuncsEnum>(vec![]).unwrap_err();
    assert_eq!(err.to_string(),
               "fieldenum: field \"A\": call non-existed function \"fa\" with expression \"fa(0)\"");
}

#[test]
fn custom_function_errors_propagate() {
    let options = vec![with_func("fa", |args: &[Value]| int_argument("fa", args).map(Value::Int)),
                       with_func("fb", |args: &[Value]| int_argument("fb", &args[1..]).map(Value::Int)),
                       with_func("fc", |args: &[Value]| int_argument("fc", args).map(Value::Int)),];
    let err = try_new::<FuncsEnum>(options).unwrap_err();
    assert!(matches!(&err, Error::Field { name, .. } if name == "B"));
    assert_eq!(err.to_string(),
               "fieldenum: field \"B\": call function fb() on unsupported type with expression \"fb(0)\"");

    let bounded = |args: &[Value]| -> Result<Value, FunctionError> {
        match int_argument("fc", args)? {
            n if n > 1 => Err(FunctionError::InvalidArgument { name:    "fc".to_string(),
                                                               details: format!("{n} is above 1"), }),
            n => Ok(Value::Int(n)),
        }
    };
    let options = vec![with_func("fa", |args: &[Value]| int_argument("fa", args).map(Value::Int)),
                       with_func("fb", |args: &[Value]| int_argument("fb", args).map(Value::Int)),
                       with_func("fc", bounded),];
    let err = try_new::<FuncsEnum>(options).unwrap_err();
    assert_eq!(err.to_string(),
               "fieldenum: field \"C\": call function fc on invalid argument: 2 is above 1 with expression \"fc(iota)\"");
}

#[test]
fn duplicate_names_are_errors() {
    for name in ["iota", "pi", "Inf", "i"] {
        let err = try_new::<IntEnum>(vec![with_value(name, 1)]).unwrap_err();
        assert_eq!(err, Error::DuplicateValue { name: name.to_string() });
    }

    let err = try_new::<IntEnum>(vec![with_value("a", 1), with_value("a", 2)]).unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: existed value with name \"a\"");

    let err = try_new::<IntEnum>(vec![with_func("pow", |_: &[Value]| Ok(Value::Int(0)))]).unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: existed function with name \"pow\"");
}

#[test]
fn negative_value_into_unsigned_is_error() {
    let err = try_new::<NegativeEnum>(vec![]).unwrap_err();
    assert_eq!(err.to_string(),
               "fieldenum: field \"A\": assign negative value \"-1\" to type u32");
}

#[test]
#[should_panic(expected = "assign negative value")]
fn new_panics_on_error() {
    let _: NegativeEnum = new(vec![]);
}

#[test]
fn out_of_range_value_is_error() {
    field_enum! {
        #[derive(Debug)]
        struct Hundreds: i8 {
            A = "iota*100",
            B,
            C,
        }
    }

    let err = try_new::<Hundreds>(vec![]).unwrap_err();
    assert!(matches!(&err,
                     Error::Field { name, source: FieldError::OutOfRange { .. } } if name == "C"));
    assert_eq!(err.to_string(),
               "fieldenum: field \"C\": assign out of range value \"200\" to type i8");
}

#[test]
fn results_are_narrowed_into_the_field_type() {
    field_enum! {
        struct Truncated: i32 {
            A = "2.9",
            B = "-2.9",
            C = "7+3i",
        }
    }
    field_enum! {
        struct RealPart: f64 {
            A = "1+2i",
            B = "1/4",
        }
    }

    let got: Truncated = try_new(vec![]).unwrap();
    assert_eq!((got.A, got.B, got.C), (2, -2, 7));

    let got: RealPart = try_new(vec![]).unwrap();
    assert_eq!((got.A, got.B), (1.0, 0.0));
}

#[test]
fn large_floats_fill_unsigned_fields() {
    field_enum! {
        struct Big: u64 {
            A = "1e19",
            B = "9223372036854775807 + 1",
            C = "pow(2, 63)",
            D = "1e19 + 2i",
        }
    }
    field_enum! {
        #[derive(Debug)]
        struct TooBig: u64 {
            A = "pow(2, 64)",
        }
    }

    let got: Big = try_new(vec![]).unwrap();
    assert_eq!(got.A, 10_000_000_000_000_000_000);
    assert_eq!(got.B, 9_223_372_036_854_775_808);
    assert_eq!(got.C, 9_223_372_036_854_775_808);
    assert_eq!(got.D, 10_000_000_000_000_000_000);

    let err = try_new::<TooBig>(vec![]).unwrap_err();
    assert!(matches!(&err,
                     Error::Field { name, source: FieldError::OutOfRange { .. } } if name == "A"));

    let err = DynamicEnum::parse(FieldType::U32, "A = 1e10").and_then(|mut target| {
                                                                 assign(&mut target, vec![])
                                                             })
                                                             .unwrap_err();
    assert!(matches!(err, Error::Field { source: FieldError::OutOfRange { .. }, .. }));
}

#[test]
fn iota_expressions() {
    field_enum! {
        struct Doubled: i64 {
            A = "2*(iota+1)",
            B,
            C,
        }
    }
    field_enum! {
        struct Halves: f32 {
            A = "pow(0.5, iota)",
            B,
            C,
        }
    }
    field_enum! {
        struct Rotations: ComplexNumber {
            A = "pow(1i, iota)",
            B,
            C,
            D,
        }
    }

    let got: Doubled = try_new(vec![]).unwrap();
    assert_eq!((got.A, got.B, got.C), (2, 4, 6));

    let got: Halves = try_new(vec![]).unwrap();
    assert_eq!((got.A, got.B, got.C), (1.0, 0.5, 0.25));

    let got: Rotations = try_new(vec![]).unwrap();
    let close = |c: ComplexNumber, real: f64, imaginary: f64| {
        (c.real - real).abs() < 1e-12 && (c.imaginary - imaginary).abs() < 1e-12
    };
    assert!(close(got.A, 1.0, 0.0));
    assert!(close(got.B, 0.0, 1.0));
    assert!(close(got.C, -1.0, 0.0));
    assert!(close(got.D, 0.0, -1.0));
}

#[test]
fn empty_tag_restarts_from_zero() {
    field_enum! {
        #[derive(Debug, PartialEq)]
        struct Restart: i64 {
            A = "5",
            B,
            C = "",
            D,
        }
    }

    let got: Restart = try_new(vec![]).unwrap();
    assert_eq!(got, Restart { A: 5, B: 6, C: 0, D: 1 });
}

#[test]
fn invalid_tag_is_parse_error() {
    field_enum! {
        #[derive(Debug)]
        struct Broken: i64 {
            A,
            B = "1 +",
        }
    }

    let err = try_new::<Broken>(vec![]).unwrap_err();
    assert_eq!(err.to_string(),
               "fieldenum: field \"B\": invalid expression \"(iota-1)+(1 +)\": unexpected token \")\" at offset 13");
}

#[test]
fn string_result_in_numeric_field_is_error() {
    field_enum! {
        #[derive(Debug)]
        struct Text: i64 {
            A = "\"x\"",
        }
    }

    let err = try_new::<Text>(vec![]).unwrap_err();
    assert!(matches!(err, Error::Field { source: FieldError::Expression(_), .. }));
}

#[test]
fn generation_is_idempotent() {
    let first: Complex128Enum = try_new(vec![]).unwrap();
    let second: Complex128Enum = try_new(vec![]).unwrap();
    assert_eq!(first, second);

    let first: ValuesEnum = try_new(vec![with_values([("a", 1), ("b", 2), ("c", 3)])]).unwrap();
    let second: ValuesEnum = try_new(vec![with_values([("a", 1), ("b", 2), ("c", 3)])]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_struct_target_is_error() {
    let mut target = 5_i32;
    let err = assign(&mut target, vec![]).unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: invalid type \"i32\"");
    assert_eq!(target, 5);
}

#[test]
fn unsupported_field_type_is_error() {
    let mut target = DynamicEnum::new(vec![FieldDescriptor::new("A",
                                                                FieldType::Other("Vec<i64>".to_string()),
                                                                None)]);
    let err = assign(&mut target, vec![]).unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: field \"A\": invalid type \"Vec<i64>\"");
}

#[test]
fn mixed_field_types_are_errors() {
    let mut target = DynamicEnum::new(vec![FieldDescriptor::new("A", FieldType::Str, None),
                                           FieldDescriptor::new("B", FieldType::I64, None)]);
    let err = assign(&mut target, vec![]).unwrap_err();
    assert_eq!(err,
               Error::MixedFieldTypes { field:    "B".to_string(),
                                        expected: FieldType::Str,
                                        found:    FieldType::I64, });
    assert_eq!(target.value("A"), None);
}

#[test]
fn unsettable_field_is_error() {
    #[derive(Debug, Default)]
    struct Hidden {
        a: String,
    }

    impl FieldEnum for Hidden {
        fn shape(&self) -> Shape {
            Shape::Struct(vec![FieldDescriptor::new("a", FieldType::Str, None).unsettable()])
        }

        fn set_field(&mut self, _: usize, value: FieldValue) -> Result<(), FieldError> {
            if let FieldValue::Str(s) = value {
                self.a = s;
            }
            Ok(())
        }
    }

    let err = try_new::<Hidden>(vec![]).unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: field \"a\": is not settable");
}

#[test]
fn failed_generation_writes_nothing() {
    let mut target = DynamicEnum::parse(FieldType::I64, "A = 1\nB\nC = missing").unwrap();
    assert!(assign(&mut target, vec![]).is_err());
    assert!(target.iter().all(|(_, value)| value.is_none()));
}

#[test]
fn empty_struct_is_accepted() {
    let mut target = DynamicEnum::new(Vec::new());
    assert!(assign(&mut target, vec![]).is_ok());
}

#[test]
fn layout_parsing() {
    let mut target = DynamicEnum::parse(FieldType::Str, "\nA\n  B = \"b\" ; C =\n\n").unwrap();
    assign(&mut target, vec![]).unwrap();
    let got: Vec<_> = target.iter()
                            .map(|(name, value)| (name.to_string(), value.cloned()))
                            .collect();
    assert_eq!(got,
               vec![("A".to_string(), Some(FieldValue::Str("A".to_string()))),
                    ("B".to_string(), Some(FieldValue::Str("b".to_string()))),
                    ("C".to_string(), Some(FieldValue::Str(String::new())))]);

    let mut target = DynamicEnum::parse(FieldType::U16, "Read = 1 << iota; Write; Execute").unwrap();
    assign(&mut target, vec![]).unwrap();
    assert_eq!(target.value("Execute"), Some(&FieldValue::U16(4)));

    let mut target = DynamicEnum::parse(FieldType::Str, "A = \"x;y\"; B = \"q\\\";\"; C").unwrap();
    assign(&mut target, vec![]).unwrap();
    assert_eq!(target.fields().len(), 3);
    assert_eq!(target.value("A"), Some(&FieldValue::Str("x;y".to_string())));
    assert_eq!(target.value("B"), Some(&FieldValue::Str("q\\\";".to_string())));
    assert_eq!(target.value("C"), Some(&FieldValue::Str("C".to_string())));

    let err = DynamicEnum::parse(FieldType::I64, "A\nnot a name = 3").unwrap_err();
    assert_eq!(err.to_string(), "fieldenum: invalid field declaration \"not a name = 3\"");
}
