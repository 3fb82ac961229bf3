use super::*;

#[test]
fn test_write_advances_location() {
    let mut writer = SourceWriter::new(&GeneratorOptions::default());
    assert_eq!(writer.output(), "");
    assert_eq!(writer.location(), SourceLocation::new(1, 1));

    writer.write("let a");
    writer.write(";");
    assert_eq!(writer.output(), "let a;");
    assert_eq!(writer.location(), SourceLocation::new(1, 7));
}

#[test]
fn test_write_line_uses_configured_line_end() {
    let options = GeneratorOptions::default().with_line_end("\r\n");
    let mut writer = SourceWriter::new(&options);
    writer.write("a;");
    writer.write_line();
    writer.write("b");
    assert_eq!(writer.output(), "a;\r\nb");
    assert_eq!(writer.location(), SourceLocation::new(2, 2));
}

#[test]
fn test_indentation_levels() {
    let options = GeneratorOptions::default().with_indent("\t");
    let mut writer = SourceWriter::new(&options);
    writer.increase_indent();
    writer.increase_indent();
    writer.write_indent();
    writer.write("x");
    assert_eq!(writer.output(), "\t\tx");

    writer.decrease_indent();
    writer.decrease_indent();
    writer.decrease_indent();
    writer.write_indent();
    assert_eq!(writer.output(), "\t\tx");
    writer.increase_indent();
    writer.write_indent();
    assert_eq!(writer.output(), "\t\tx\t");
}

#[test]
fn test_into_output() {
    let mut writer = SourceWriter::new(&GeneratorOptions::default());
    writer.write("€");
    assert_eq!(writer.location(), SourceLocation::new(1, 2));
    assert_eq!(writer.into_output(), "€");
}
