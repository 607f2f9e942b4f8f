use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, multispace0},
    combinator::rest,
    sequence::{delimited, preceded},
};

pub fn parse_between_double_quotes(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), is_not("\""), char('"')).parse(input)
}

/// Parses the program part of a command line, which is either double quoted or runs until the
/// end of the input (unquoted paths can contain spaces, so arguments can't be told apart)
pub fn parse_command_program(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, alt((parse_between_double_quotes, rest))).parse(input)
}

/// Cuts an unquoted command line after the first `.exe`, dropping any arguments
fn strip_arguments(program: &str) -> &str {
    match program.to_ascii_lowercase().find(".exe") {
        Some(i) => &program[..i + ".exe".len()],
        None => program.trim_end(),
    }
}

/// Returns the directory containing the program run by an `UninstallString` command line, e.g.
/// `"C:\Games\Foo\unins000.exe" /SILENT` gives `C:\Games\Foo`
pub fn parse_uninstall_directory(uninstall_string: &str) -> Option<String> {
    let (_, program) = parse_command_program(uninstall_string).ok()?;
    let (directory, _) = strip_arguments(program).rsplit_once(['\\', '/'])?;

    (!directory.is_empty()).then(|| directory.to_owned())
}
