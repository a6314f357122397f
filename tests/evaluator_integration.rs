use jeff::environment::Environment;
use jeff::object::Object;

fn run(input: &str) -> Object {
    let (program, errors) = jeff::parse(input);
    assert!(errors.is_empty(), "unexpected parser errors: {errors:?}");
    let env = Environment::new_root();
    (*jeff::eval(&program, &env)).clone()
}

#[test]
fn bindings_can_be_shadowed_in_the_same_scope() {
    assert_eq!(run("jeff's x is 5; jeff's x is x + 1; x"), Object::Integer(6));
}

#[test]
fn blocks_do_not_introduce_their_own_scope_for_return() {
    let input = r#"
        jeff's classify is fn(n) {
            if (n > 0) {
                if (n > 100) {
                    return "big";
                }
                return "small";
            }
            return "non-positive";
        };
        classify(150);
    "#;
    assert_eq!(run(input), Object::String("big".to_owned()));
}

#[test]
fn closures_share_their_defining_environment() {
    let input = r#"
        jeff's counter is fn() {
            jeff's count is 0;
            fn() {
                count
            }
        };
        jeff's get is counter();
        get();
    "#;
    assert_eq!(run(input), Object::Integer(0));
}

#[test]
fn string_concatenation_and_len_builtin_compose() {
    let input = r#"len("hello" + " " + "world")"#;
    assert_eq!(run(input), Object::Integer(11));
}

#[test]
fn type_mismatch_between_integer_and_boolean_is_an_error() {
    assert_eq!(
        run("5 + right;"),
        Object::Error("type mismatch: INTEGER + BOOLEAN".to_owned())
    );
}

#[test]
fn len_rejects_non_string_arguments() {
    assert_eq!(
        run("len(42)"),
        Object::Error("argument to `len` not supported, got INTEGER".to_owned())
    );
}

#[test]
fn calling_an_undeclared_identifier_reports_missing_name() {
    assert_eq!(
        run("nonexistent(1, 2)"),
        Object::Error("identifier not found: nonexistent".to_owned())
    );
}

#[test]
fn parser_reports_errors_for_malformed_binding() {
    let (_, errors) = jeff::parse("jeff's is 5;");
    assert!(!errors.is_empty());
    assert!(errors[0].contains("expected next token to be IDENT"));
}

#[test]
fn program_is_evaluated_statement_by_statement_with_last_value_returned() {
    let input = "jeff's a is 1; jeff's b is 2; a + b";
    assert_eq!(run(input), Object::Integer(3));
}
