use pretty_assertions::assert_eq;

use crate::config::Config;
use crate::error::Error;
use crate::interpreter::output::OutputHandler;
use crate::interpreter::{Interpreter, RunReport, RunStatus};
use crate::value::Value;

fn interpreter_with(config: Config) -> (Interpreter, OutputHandler) {
    let output = OutputHandler::buffer();
    (Interpreter::new(config, output.clone()), output)
}

fn run(source: &str) -> (Result<RunReport, Error>, Vec<String>) {
    let (mut interpreter, output) = interpreter_with(Config::default());
    let result = interpreter.run_source(source);
    (result, output.lines())
}

fn eval(source: &str) -> Result<Value, Error> {
    let (mut interpreter, _) = interpreter_with(Config::default());
    interpreter.evaluate_source_expression(source)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn text(s: &str) -> Value {
    Value::String(s.to_string())
}

fn runtime_message(result: Result<RunReport, Error>) -> String {
    match result {
        Err(Error::Runtime(err)) => err.message,
        other => panic!("expected a runtime error, got {:?}", other),
    }
}

/* ------------------------------------------------------------------
 * Operators
 * ---------------------------------------------------------------- */

#[test]
fn plus_adds_numbers_and_numeric_text_otherwise_concatenates() {
    assert_eq!(eval("\"2\" + 3").unwrap(), num(5.0));
    assert_eq!(eval("true + 1").unwrap(), text("true1"));
    assert_eq!(eval("\"a\" + 1").unwrap(), text("a1"));
    assert_eq!(eval("nil + \"!\"").unwrap(), text("null!"));
}

#[test]
fn arithmetic_requires_numbers() {
    assert_eq!(eval("7 % 3").unwrap(), num(1.0));
    assert_eq!(eval("2 ** 10").unwrap(), num(1024.0));
    assert_eq!(eval("true * 4").unwrap(), num(4.0));

    let err = eval("\"a\" - 1").unwrap_err();
    assert_eq!(err.code(), "E_TYPE");
}

#[test]
fn two_division_operators() {
    assert_eq!(eval("7 $ 2").unwrap(), num(3.5));
    assert_eq!(eval("7 $$ 2").unwrap(), num(3.0));
    assert_eq!(eval("-7 $$ 2").unwrap(), num(-4.0));

    for source in ["1 $ 0", "1 $$ 0"] {
        match eval(source) {
            Err(Error::Runtime(err)) => assert_eq!(err.message, "Division by zero."),
            other => panic!("expected division error, got {:?}", other),
        }
    }
}

#[test]
fn bitwise_operators_truncate() {
    assert_eq!(eval("1 << 4").unwrap(), num(16.0));
    assert_eq!(eval("-7 >> 1").unwrap(), num(-4.0));
    assert_eq!(eval("~0").unwrap(), num(-1.0));
    assert_eq!(eval("6 & 3").unwrap(), num(2.0));
    assert_eq!(eval("6 | 3").unwrap(), num(7.0));
    assert_eq!(eval("6 ^ 3").unwrap(), num(5.0));
    assert_eq!(eval("5.9 & 7").unwrap(), num(5.0));
    assert!(eval("1 << 64").is_err());
}

#[test]
fn equality_flavours() {
    assert_eq!(eval("\"1\" == true").unwrap(), Value::Bool(true));
    assert_eq!(eval("\"5\" == 5").unwrap(), Value::Bool(true));
    assert_eq!(eval("\"5\" != 5").unwrap(), Value::Bool(false));
    assert_eq!(eval("\"5\" === 5").unwrap(), Value::Bool(false));
    assert_eq!(eval("nil === null").unwrap(), Value::Bool(true));
    assert_eq!(eval("2 === 2.0").unwrap(), Value::Bool(true));
}

#[test]
fn membership_and_identity() {
    assert_eq!(eval("\"ell\" in \"hello\"").unwrap(), Value::Bool(true));
    assert_eq!(eval("\"z\" not in \"hello\"").unwrap(), Value::Bool(true));
    assert_eq!(eval("3 is int").unwrap(), Value::Bool(true));
    assert_eq!(eval("3.5 is float").unwrap(), Value::Bool(true));
    assert_eq!(eval("3.5 is not int").unwrap(), Value::Bool(true));
    assert_eq!(eval("\"a\" is char").unwrap(), Value::Bool(true));
    assert_eq!(eval("true is bool").unwrap(), Value::Bool(true));
}

#[test]
fn membership_is_false_unless_both_sides_are_text() {
    assert_eq!(eval("1 in 10").unwrap(), Value::Bool(false));
    assert_eq!(eval("1 not in 10").unwrap(), Value::Bool(true));
    assert_eq!(eval("nil in \"null\"").unwrap(), Value::Bool(false));
    assert_eq!(eval("\"ru\" in true").unwrap(), Value::Bool(false));
    assert_eq!(eval("\"1\" in \"10\"").unwrap(), Value::Bool(true));
}

#[test]
fn identity_only_knows_declared_type_names() {
    assert_eq!(eval("nil is nil").unwrap(), Value::Bool(false));
    assert_eq!(eval("nil is \"null\"").unwrap(), Value::Bool(false));
    assert_eq!(eval("3 is number").unwrap(), Value::Bool(false));
    assert_eq!(eval("clock is function").unwrap(), Value::Bool(false));
    assert_eq!(eval("3 is 3").unwrap(), Value::Bool(false));
    assert_eq!(eval("3 is not 3").unwrap(), Value::Bool(true));
    assert_eq!(eval("3 is double").unwrap(), Value::Bool(true));
}

#[test]
fn logical_operators_short_circuit_to_operands() {
    assert_eq!(eval("0 and 5").unwrap(), num(0.0));
    assert_eq!(eval("1 and 5").unwrap(), num(5.0));
    assert_eq!(eval("0 or 5").unwrap(), num(5.0));
    assert_eq!(eval("\"\" or \"x\"").unwrap(), text("x"));
    assert_eq!(eval("not 0").unwrap(), Value::Bool(true));
    assert_eq!(eval("!1").unwrap(), Value::Bool(false));

    // The right side is never evaluated, so the missing variable is fine.
    assert_eq!(eval("false and @missing").unwrap(), Value::Bool(false));
}

#[test]
fn comparisons_coerce_to_numbers() {
    assert_eq!(eval("\"10\" > 9").unwrap(), Value::Bool(true));
    assert_eq!(eval("2 <= 2").unwrap(), Value::Bool(true));
    assert!(eval("\"x\" < 1").is_err());
}

#[test]
fn bare_words_fall_back_to_text() {
    assert_eq!(eval("hello").unwrap(), text("hello"));
    assert_eq!(eval("hello + world").unwrap(), text("helloworld"));
}

#[test]
fn postfix_returns_old_value_and_writes_back() {
    let (result, lines) = run("/summon int @i (5)\n/summon int @old @i++\n/say {@old} {@i}");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["5 6"]);
}

#[test]
fn postfix_needs_a_numeric_variable() {
    match eval("5++") {
        Err(Error::Runtime(err)) => assert_eq!(err.message, "Operand of '++' must be a variable."),
        other => panic!("expected postfix error, got {:?}", other),
    }

    let (result, _) = run("/summon string @s \"a\"\n/summon int @t @s--");
    assert_eq!(
        runtime_message(result),
        "Operand of '--' must hold a number, got string."
    );
}

/* ------------------------------------------------------------------
 * Statements
 * ---------------------------------------------------------------- */

#[test]
fn summon_defaults_by_type() {
    let (_, lines) = run("/summon int @a\n/summon bool @b\n/summon string @c\n/summon thing @d\n/say {@a} {@b} [{@c}] {@d}");
    assert_eq!(lines, vec!["0 false [] null"]);
}

#[test]
fn set_requires_an_existing_variable() {
    let (result, lines) = run("/set @y = (2)");

    assert_eq!(runtime_message(result), "Undefined variable '@y'.");
    assert_eq!(lines, vec!["[line 1] Undefined variable '@y'."]);
}

#[test]
fn compound_assignment_operators() {
    let (_, lines) = run(
        "/summon int @x (20)\n\
         /set @x -= (2)\n/say {@x}\n\
         /set @x $= (4)\n/say {@x}\n\
         /set @x $$= (2)\n/say {@x}\n\
         /set @x **= (2)\n/say {@x}\n\
         /set @x %= (5)\n/say {@x}\n\
         /set @x *= { @x + 1 }\n/say {@x}",
    );

    assert_eq!(lines, vec!["18", "4.5", "2", "4", "4", "20"]);
}

#[test]
fn expr_assignment() {
    let (_, lines) = run("/summon int @x\n/expr @x { 3 * (2 + 1) }\n/say {@x}");
    assert_eq!(lines, vec!["9"]);
}

#[test]
fn elif_chain_picks_first_true_arm() {
    let source = "/summon int @x (2)\n\
                  /execute if @x > 3 run { /say big }\n\
                  elif @x > 1 run { /say medium }\n\
                  else { /say small }";
    let (_, lines) = run(source);
    assert_eq!(lines, vec!["medium"]);
}

#[test]
fn unreached_malformed_condition_is_harmless() {
    let (result, lines) = run("/execute if true run { /say ok } elif @x > > 1 run { /say no }");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["ok"]);
}

#[test]
fn malformed_condition_fails_when_evaluated() {
    let (result, _) = run("/summon int @x (1)\n/execute if @x > > 1 run { /say no }");

    match result {
        Err(Error::Runtime(err)) => {
            assert_eq!(err.message, "Error at '>': Expected expression.");
            assert_eq!(err.line, Some(2));
        }
        other => panic!("expected runtime error, got {:?}", other),
    }
}

#[test]
fn while_loop_with_skip_and_stop() {
    let source = "/summon int @i (0)\n\
                  /execute while @i < 10 run {\n\
                  /set @i += (1)\n\
                  /execute if @i == 2 run { /skip }\n\
                  /execute if @i > 4 run { /stop }\n\
                  /say {@i}\n\
                  }";
    let (_, lines) = run(source);
    assert_eq!(lines, vec!["1", "3", "4"]);
}

#[test]
fn for_each_over_text_and_numbers() {
    let (_, lines) = run(
        "/execute for @c in \"abc\" run { /say {@c} }\n/execute for @n in 2 run { /say n={@n} }",
    );
    assert_eq!(lines, vec!["a", "b", "c", "n=0", "n=1"]);
}

#[test]
fn for_each_over_nil_is_empty_and_bool_is_an_error() {
    let (result, lines) = run("/execute for @c in nil run { /say {@c} }");
    assert!(result.is_ok());
    assert!(lines.is_empty());

    let (result, _) = run("/execute for @c in true run { /say {@c} }");
    assert_eq!(runtime_message(result), "Cannot iterate over a bool.");
}

#[test]
fn loop_scopes_do_not_leak() {
    let (_, lines) = run(
        "/execute for @i in range (2) run { /summon int @tmp (1) }\n/say {@tmp} {@i}",
    );
    assert_eq!(lines, vec!["{@tmp} {@i}"]);
}

#[test]
fn kill_terminates_the_program() {
    let (result, lines) = run("/say a\n/kill\n/say b");

    assert_eq!(result.unwrap().status, RunStatus::Terminated);
    assert_eq!(lines, vec!["a"]);
}

#[test]
fn kill_inside_a_function_reaches_the_driver() {
    let (result, lines) = run(
        "/function quit () { /kill }\n/summon int @z quit()\n/say after",
    );

    assert_eq!(result.unwrap().status, RunStatus::Terminated);
    assert!(lines.is_empty());
}

#[test]
fn stray_stop_ends_the_unit_quietly() {
    let (result, lines) = run("/say a\n/stop\n/say b");

    assert_eq!(result.unwrap().status, RunStatus::Completed);
    assert_eq!(lines, vec!["a"]);
}

/* ------------------------------------------------------------------
 * Functions
 * ---------------------------------------------------------------- */

#[test]
fn closures_capture_their_defining_scope() {
    let source = "/function makeCounter () run {\n\
                  /summon int @count (0)\n\
                  /function inc () run {\n\
                  /set @count += (1)\n\
                  /return @count\n\
                  }\n\
                  /return inc\n\
                  }\n\
                  /summon fn @c makeCounter()\n\
                  /say {@c()}\n\
                  /say {@c()}";
    let (_, lines) = run(source);
    assert_eq!(lines, vec!["1", "2"]);
}

#[test]
fn scoping_is_lexical_not_dynamic() {
    let source = "/summon int @x (1)\n\
                  /function show () run { /return @x }\n\
                  /function shadow () run {\n\
                  /summon int @x (2)\n\
                  /return show()\n\
                  }\n\
                  /say {shadow()}";
    let (_, lines) = run(source);
    assert_eq!(lines, vec!["1"]);
}

#[test]
fn recursion() {
    let source = "/function fib (@n) run {\n\
                  /execute if @n < 2 run { /return @n }\n\
                  /return fib(@n - 1) + fib(@n - 2)\n\
                  }\n\
                  /say {fib((10))}";
    let (_, lines) = run(source);
    assert_eq!(lines, vec!["55"]);
}

#[test]
fn missing_return_yields_nil() {
    let (_, lines) = run("/function g () { /say inside }\n/say {g()}");
    assert_eq!(lines, vec!["inside", "null"]);
}

#[test]
fn calling_a_non_function_fails() {
    let (result, _) = run("/summon int @x (1)\n/summon int @y @x()");
    assert_eq!(runtime_message(result), "Can only call functions.");
}

#[test]
fn runaway_recursion_is_a_runtime_error() {
    let config = Config {
        max_call_depth: 16,
        ..Config::default()
    };
    let (mut interpreter, _) = interpreter_with(config);

    let result = interpreter.run_source("/function f () { /return f() }\n/summon int @x f()");
    assert_eq!(runtime_message(result), "Stack overflow.");
}

#[test]
fn runaway_recursion_at_default_depth_is_a_runtime_error() {
    let (result, lines) = run("/function f (@n) { /return f(@n - 1) }\n/summon int @x f(1)");

    assert_eq!(runtime_message(result), "Stack overflow.");
    assert_eq!(lines, vec!["[line 1] Stack overflow."]);
}

#[test]
fn deep_recursion_below_the_limit_completes() {
    let source = "/function down (@n) run {\n\
                  /execute if @n == 0 run { /return 0 }\n\
                  /return down(@n - 1) + 1\n\
                  }\n\
                  /say {down((250))}";
    let (result, lines) = run(source);

    assert!(result.is_ok());
    assert_eq!(lines, vec!["250"]);
}

#[test]
fn function_values_print_their_names() {
    assert_eq!(eval("toString(clock)").unwrap(), text("<native fn clock>"));

    let (_, lines) = run("/function f () { }\n/say {f}");
    assert_eq!(lines, vec!["<fn f>"]);
}

/* ------------------------------------------------------------------
 * Natives
 * ---------------------------------------------------------------- */

#[test]
fn native_functions() {
    assert_eq!(eval("toString(42)").unwrap(), text("42"));
    assert!(matches!(eval("clock()").unwrap(), Value::Number(n) if n > 0.0));

    match eval("clock(1)") {
        Err(Error::Runtime(err)) => assert_eq!(err.message, "Expected 0 arguments but got 1."),
        other => panic!("expected arity error, got {:?}", other),
    }

    let (mut interpreter, output) = interpreter_with(Config::default());
    assert_eq!(interpreter.evaluate_source_expression("print(\"hi\")").unwrap(), Value::Null);
    assert_eq!(output.lines(), vec!["hi"]);
}

/* ------------------------------------------------------------------
 * Driver and configuration
 * ---------------------------------------------------------------- */

#[test]
fn lex_errors_are_reported_but_not_fatal() {
    let (result, lines) = run("/say one\n#\n/say two");

    assert_eq!(result.unwrap().lex_errors.len(), 1);
    assert_eq!(lines, vec!["[line 2] Unexpected character '#'.", "one", "two"]);
}

#[test]
fn parse_errors_abort_the_whole_unit() {
    let (result, lines) = run("/say hi\n/set @x");

    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(
        lines,
        vec!["[line 2] Error at '': Expected an assignment operator after variable."]
    );
}

#[test]
fn runtime_errors_keep_earlier_bindings() {
    let (mut interpreter, output) = interpreter_with(Config::default());

    assert!(interpreter
        .run_source("/summon int @x (1)\n/set @y = (2)\n/set @x = (5)")
        .is_err());
    output.clear();

    interpreter.run_source("/say {@x}").unwrap();
    assert_eq!(output.lines(), vec!["1"]);
}

#[test]
fn interpolation_can_be_disabled() {
    let config = Config {
        interpolate_output: false,
        ..Config::default()
    };
    let (mut interpreter, output) = interpreter_with(config);

    interpreter.run_source("/say {1 + 1}").unwrap();
    assert_eq!(output.lines(), vec!["{1 + 1}"]);
}

#[test]
fn error_echo_can_be_disabled() {
    let config = Config {
        echo_errors: false,
        ..Config::default()
    };
    let (mut interpreter, output) = interpreter_with(config);

    assert!(interpreter.run_source("/set @nope = 1").is_err());
    assert!(output.lines().is_empty());
}

#[test]
fn interpolation_tiers() {
    let (_, lines) = run("/summon int @x (5)\n/say total: {@x * 2}, raw: {@x}, missing: { @y }, empty: {}");
    assert_eq!(lines, vec!["total: 10, raw: 5, missing: { @y }, empty: {}"]);
}
