use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_wabbit-rt"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.unwrap()
}

fn stdout_of(args: &[&str]) -> Vec<u8> {
	let output = run(args);
	assert!(output.status.success(), "{output:?}");
	output.stdout
}

#[test]
fn mixed_sequence() {
	let stdout = stdout_of(&["int:42", "float:3.5", "bool:1", "char:x"]);
	assert_eq!(stdout, b"Out: 42\nOut: 3.500000\nOut: true\nx");
}

#[test]
fn int_line() {
	let stdout = String::from_utf8(stdout_of(&["int:-2147483648"])).unwrap();
	insta::assert_snapshot!(stdout.trim_end(), @"Out: -2147483648");
	assert!(stdout.ends_with('\n'));
}

#[test]
fn float_default_precision() {
	assert_eq!(stdout_of(&["float:3.0"]), b"Out: 3.000000\n");
	assert_eq!(stdout_of(&["float:-0.0"]), b"Out: -0.000000\n");
	assert_eq!(stdout_of(&["float:inf"]), b"Out: inf\n");
	assert_eq!(stdout_of(&["float:NaN"]), b"Out: nan\n");
}

#[test]
fn any_nonzero_bool_is_true() {
	assert_eq!(stdout_of(&["bool:0"]), b"Out: false\n");
	assert_eq!(stdout_of(&["bool:1"]), b"Out: true\n");
	assert_eq!(stdout_of(&["bool:-1"]), b"Out: true\n");
	assert_eq!(stdout_of(&["bool:false", "bool:true"]), b"Out: false\nOut: true\n");
}

#[test]
fn chars_build_a_string() {
	let args: Vec<_> = "hello".chars().map(|c| format!("char:{c}")).collect();
	let args: Vec<_> = args.iter().map(String::as_str).collect();
	assert_eq!(stdout_of(&args), b"hello");
}

#[test]
fn repeated_calls_are_independent() {
	let stdout = stdout_of(&["--repeat", "2", "int:7", "char:."]);
	assert_eq!(stdout, b"Out: 7\n.Out: 7\n.");
}

#[test]
fn logs_stay_off_stdout() {
	let output = Command::new(env!("CARGO_BIN_EXE_wabbit-rt"))
		.args(["int:1", "char:z"])
		.env("RUST_LOG", "trace")
		.output()
		.unwrap();
	assert!(output.status.success());
	assert_eq!(output.stdout, b"Out: 1\nz");
	assert!(!output.stderr.is_empty());
}

#[test]
fn closed_stdout_is_ignored() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_wabbit-rt"))
		.args(["--repeat", "200000", "int:1", "char:x"])
		.env_remove("RUST_LOG")
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();

	// far more output than a pipe buffers, so writes hit EPIPE
	drop(child.stdout.take());

	let output = child.wait_with_output().unwrap();
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(output.status.success(), "{output:?}");
	assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn malformed_value_is_rejected() {
	let output = run(&["int:twelve"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());

	let output = run(&["char:ab"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}

#[test]
fn values_are_required() {
	let output = run(&[]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}
