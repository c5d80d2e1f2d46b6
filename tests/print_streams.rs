use utmatrix::{algebra::*, io::*};

fn test_print_matrix() -> TriuMatrix<i32> {
    TriuMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6]]).unwrap()
}

const EXPECTED: &str = "[ 1 2 3 ]\n[ 0 4 5 ]\n[ 0 0 6 ]\n";

#[test]
fn test_print_to_stdout() {
    let mut printer = MatrixPrinter::new(true);
    printer.print_to_stdout();
    printer.print(&test_print_matrix()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut printer = MatrixPrinter::new(false);
    printer.print_to_buffer();
    printer.print(&test_print_matrix()).unwrap();
    let result = printer.get_print_buffer().unwrap();
    assert_eq!(result, EXPECTED);
}

#[test]
fn test_print_verbose_header() {
    let mut printer = MatrixPrinter::new(true);
    printer.print_to_buffer();
    printer.print(&test_print_matrix()).unwrap();
    let result = printer.get_print_buffer().unwrap();
    assert!(result.starts_with("TriuMatrix 3x3\n"));
    assert!(result.ends_with(EXPECTED));
}

#[test]
fn test_print_buffer_not_configured() {
    let mut printer = MatrixPrinter::default();
    assert!(printer.get_print_buffer().is_err());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut printer = MatrixPrinter::new(true);
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    printer.print_to_file(file.into_file());
    printer.print(&test_print_matrix()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("TriuMatrix 3x3"));
    assert!(result.contains(EXPECTED));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut printer = MatrixPrinter::new(false);
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    printer.print_to_stream(stream);
    printer.print(&test_print_matrix()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert_eq!(result, EXPECTED);
}
