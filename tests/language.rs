use std::{cell::RefCell, fs};

use kodme::{
    ast::{Expr, LiteralValue, Statement},
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, MAX_EVAL_DEPTH},
        host::{Callbacks, ScriptedHost},
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "kd"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = kodme::run(&code, ScriptedHost::default()) {
            panic!("Demo {path:?} failed:\n{code}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn output_of_file(path: &str) -> Vec<String> {
    let code = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    output_of(&code)
}

fn output_of(src: &str) -> Vec<String> {
    let mut host = ScriptedHost::default();
    if let Err(e) = kodme::run(src, &mut host) {
        panic!("Script failed: {e}");
    }
    host.output
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(output_of(src), expected, "unexpected output for:\n{src}");
}

fn assert_success(src: &str) {
    if let Err(e) = kodme::run(src, ScriptedHost::default()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match kodme::run(src, ScriptedHost::default()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn demo_outputs() {
    assert_eq!(output_of_file("demos/hello.kd"), vec!["Hello, Kodme!"]);

    let fibonacci = output_of_file("demos/fibonacci.kd");
    assert_eq!(fibonacci.first().map(String::as_str), Some("0"));
    assert_eq!(fibonacci.last().map(String::as_str), Some("34"));

    let conditions = output_of_file("demos/conditions.kd");
    assert_eq!(conditions[0], "Grade: B");

    let countdown = output_of_file("demos/countdown.kd");
    assert_eq!(countdown.len(), 6);
    assert_eq!(countdown[0], "T-minus 5");
    assert_eq!(countdown[5], "Liftoff!");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("show 1 + 1", &["2"]);
    assert_output("show 1 + 2 * 3", &["7"]);
    assert_output("show (1 + 2) * 3", &["9"]);
    assert_output("show 10 - 4 - 3", &["3"]);
    assert_output("show 7 / 2", &["3.5"]);
    assert_output("show -3 * -2", &["6"]);
    assert_output("show 0.1 + 0.2", &["0.30000000000000004"]);
}

#[test]
fn variables_and_reassignment() {
    assert_output("a = 10\nb = 20\nshow a + b", &["30"]);
    assert_output("x = 1\nx = x + 1\nshow x", &["2"]);
}

#[test]
fn value_display_forms() {
    assert_output("show true\nshow false", &["true", "false"]);
    assert_output("show 3.0\nshow 2.50", &["3", "2.5"]);
    assert_output("show 0 * -1", &["0"]);
    assert_output("show \"plain text\"", &["plain text"]);
}

#[test]
fn text_concatenation() {
    assert_output("name = \"Ada\"\nshow \"Hello, \" + name + \"!\"", &["Hello, Ada!"]);
    assert_output("show \"Score: \" + 42", &["Score: 42"]);
    assert_output("show 1 + 2 + \" apples\"", &["3 apples"]);
    assert_output("show \"done: \" + true", &["done: true"]);
}

#[test]
fn comparisons_and_equality() {
    assert_output("show 2 < 3\nshow 3 <= 3\nshow 2 > 3\nshow 3 >= 4",
                  &["true", "true", "false", "false"]);
    assert_output("show 1 == \"1\"", &["false"]);
    assert_output("show 1 != \"1\"", &["true"]);
    assert_output("show \"a\" == \"a\"", &["true"]);
    assert_output("show true == true", &["true"]);
}

#[test]
fn logical_operators_return_operands() {
    assert_output("show false or \"fallback\"", &["fallback"]);
    assert_output("show 0 or 1", &["0"]);
    assert_output("show true and 5", &["5"]);
    assert_output("show false and missing", &["false"]);
    assert_output("show true or missing", &["true"]);
}

#[test]
fn truthiness_in_conditions() {
    assert_output("if 0\n    show \"zero is truthy\"", &["zero is truthy"]);
    assert_output("if \"\"\n    show \"empty text is truthy\"", &["empty text is truthy"]);
    assert_output("if false\n    show 1\nelse\n    show 2", &["2"]);
}

#[test]
fn if_else_runs_only_the_taken_branch() {
    let src = "x = 5\nif x > 3\n    show \"big\"\nelse\n    show \"small\"";
    assert_output(src, &["big"]);

    let src = "x = 1\nif x > 3\n    show \"big\"\nelse if x > 0\n    show \"positive\"\nelse\n    \
               show \"other\"";
    assert_output(src, &["positive"]);
}

#[test]
fn one_line_if_else() {
    assert_output("if true: show \"T\" else: show \"F\"", &["T"]);
    assert_output("if false: show \"T\" else: show \"F\"", &["F"]);

    let src = "x = 2\nif x == 1: show \"one\" else if x == 2: show \"two\" else: show \"many\"";
    assert_output(src, &["two"]);
}

#[test]
fn counted_repeat() {
    assert_output("count = 0\nrepeat 3: count = count + 1\nshow count", &["3"]);
    assert_output("repeat 2\n    show \"hi\"", &["hi", "hi"]);
    assert_output("repeat 0\n    show \"never\"\nshow \"after\"", &["after"]);
    assert_output("n = 2\nrepeat n + 1: show n", &["2", "2", "2"]);
}

#[test]
fn repeat_count_is_evaluated_once() {
    assert_output("n = 3\nrepeat n\n    n = n - 1\nshow n", &["0"]);
}

#[test]
fn repeat_until_checks_before_each_iteration() {
    assert_output("i = 0\nrepeat until i == 3\n    show i\n    i = i + 1", &["0", "1", "2"]);
    assert_output("repeat until true\n    show \"never\"\nshow \"after\"", &["after"]);
}

#[test]
fn block_scoping() {
    let err = assert_failure("if true\n    inner = 1\nshow inner");
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnknownVariable { name: "inner".to_string(),
                                                              line: 3, }));

    assert_output("total = 0\nrepeat 4\n    total = total + 2\nshow total", &["8"]);
}

#[test]
fn each_iteration_gets_a_fresh_scope() {
    let src = "i = 0\nrepeat 2\n    i = i + 1\n    if i == 2\n        show seen\n    seen = i";
    let err = assert_failure(src);

    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { line: 5, .. })));
}

#[test]
fn unknown_variable_stops_the_run() {
    let mut host = ScriptedHost::default();
    let err = kodme::run("show 1\nshow missing + 1\nshow 3", &mut host).unwrap_err();

    assert_eq!(host.output, vec!["1"]);
    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert_eq!(err.to_string(), "Error on line 2: Unknown variable 'missing'.");
}

#[test]
fn runtime_type_errors() {
    for src in ["show \"a\" - 1", "show true * 2", "show 1 < \"2\"", "show -\"x\"", "show true + 1"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { line: 1, .. })),
                "expected a type error for {src}, got {err:?}");
    }
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_output("x = 0\nshow 10 / x\nshow -1 / x\nshow x / x",
                  &["Infinity", "-Infinity", "NaN"]);
}

#[test]
fn invalid_repeat_counts() {
    let err = assert_failure("repeat \"three\"\n    show 1");
    assert_eq!(err, Error::Runtime(RuntimeError::ExpectedNumber { line: 1 }));

    let err = assert_failure("repeat 99999999999999999999\n    show 1");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidLoopBounds { line: 1, .. })));

    assert_success("repeat -5\n    show 1");
}

#[test]
fn syntax_errors_prevent_execution() {
    let mut host = ScriptedHost::default();
    let err = kodme::run("show 1\nshow (\nshow 2 2", &mut host).unwrap_err();

    assert!(host.output.is_empty());
    let Error::Parse(errors) = &err else {
        panic!("Expected parse errors, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let err = assert_failure(&format!("show {}1", "(".repeat(20_000)));

    assert_eq!(err, Error::Parse(vec![ParseError::NestingTooDeep { line: 1 }]));
    assert_eq!(err.to_string(), "Error on line 1: Too deeply nested.");
}

#[test]
fn evaluator_limits_hand_built_nesting() {
    let mut expr = Expr::Literal { value: LiteralValue::Number(1.0),
                                   line:  3, };
    for _ in 0..=MAX_EVAL_DEPTH {
        expr = Expr::Grouping { expr: Box::new(expr),
                                line: 3, };
    }
    let program = vec![Statement::Show { expr, line: 3 }];

    let mut context = Context::new(ScriptedHost::default());
    assert_eq!(context.interpret(&program),
               Err(RuntimeError::NestingTooDeep { line: 3 }));

    context.run("show (((1)))").unwrap();
    assert_eq!(context.host().output, vec!["1"]);
}

#[test]
fn lex_errors_are_fatal() {
    let err = assert_failure("show 1 @ 2");
    assert_eq!(err.kind(), ErrorKind::Lex);

    let err = assert_failure("if true\n        show 1\n    show 2");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.line(), 3);
}

#[test]
fn ask_uses_the_host() {
    let mut host = ScriptedHost::with_answers(["Ada", "7"]);
    kodme::run("ask \"Name?\" name\nask \"Lucky number?\" lucky\nshow name + \" likes \" + lucky",
               &mut host).unwrap();

    assert_eq!(host.prompts, vec!["Name?", "Lucky number?"]);
    assert_eq!(host.output, vec!["Ada likes 7"]);
    assert_eq!(host.remaining_answers(), 0);
}

#[test]
fn answers_are_always_text() {
    let mut host = ScriptedHost::with_answers(["7"]);
    kodme::run("ask \"n?\" n\nshow n == 7\nshow n + 1", &mut host).unwrap();

    assert_eq!(host.output, vec!["false", "71"]);
}

#[test]
fn exhausted_answers_are_empty_text() {
    assert_output("ask \"Anything?\" reply\nshow \"[\" + reply + \"]\"", &["[]"]);
    assert_eq!(output_of_file("demos/greeting.kd"), vec!["Nice to meet you, stranger!"]);
}

#[test]
fn callbacks_host_receives_events_in_order() {
    let events = RefCell::new(Vec::new());
    let host = Callbacks::new(|text: &str| events.borrow_mut().push(format!("show {text}")),
                              |prompt: &str| {
                                  events.borrow_mut().push(format!("ask {prompt}"));
                                  "Bob".to_string()
                              });

    kodme::run("show \"start\"\nask \"Who?\" who\nshow who", host).unwrap();

    assert_eq!(events.into_inner(), vec!["show start", "ask Who?", "show Bob"]);
}

#[test]
fn context_persists_between_runs() {
    let mut context = Context::new(ScriptedHost::default());

    context.run("counter = 1").unwrap();
    context.run("counter = counter + 1").unwrap();
    assert!(context.run("if true\n    show counter\n    show nope").is_err());
    assert_eq!(context.environment().depth(), 1);

    context.run("show counter").unwrap();
    assert_eq!(context.into_host().output, vec!["2", "2"]);
}

#[test]
fn declarations_shadow_outer_variables() {
    let declare = |name: &str, value: f64| Statement::VariableDeclaration {
        name:        name.to_string(),
        initializer: Some(Expr::Literal { value: LiteralValue::Number(value),
                                          line:  1, }),
        line:        1,
    };
    let show = |name: &str| Statement::Show { expr: Expr::Variable { name: name.to_string(),
                                                                     line: 1, },
                                              line: 1, };

    let program = vec![declare("x", 1.0),
                       Statement::Block { statements: vec![declare("x", 2.0), show("x")],
                                          line:       1, },
                       show("x"),
                       Statement::VariableDeclaration { name:        "empty".to_string(),
                                                        initializer: None,
                                                        line:        1, },
                       show("empty")];

    let mut context = Context::new(ScriptedHost::default());
    context.interpret(&program).unwrap();

    assert_eq!(context.host().output, vec!["2", "1", "nil"]);
    assert_eq!(context.environment().get("empty"), Some(&Value::Absent));
}

#[test]
fn absent_values_compare_equal() {
    let program = vec![Statement::VariableDeclaration { name:        "a".to_string(),
                                                        initializer: None,
                                                        line:        1, },
                       Statement::VariableDeclaration { name:        "b".to_string(),
                                                        initializer: None,
                                                        line:        1, }];
    let mut context = Context::new(ScriptedHost::default());
    context.interpret(&program).unwrap();
    context.run("show a == b\nshow a or \"default\"").unwrap();

    assert_eq!(context.host().output, vec!["true", "default"]);
}
