use std::process::Command;

const SVD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/stm32_test.svd");

fn svd2bitfilled() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svd2bitfilled"))
}

#[test]
fn prints_struct() {
    let out = svd2bitfilled().args([SVD, "FSMC"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("struct FSMC_t {\n"));
    assert!(stdout.ends_with("};\n"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tim2.hpp");
    let out = svd2bitfilled()
        .args([SVD, "TIM2", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("struct TIM2_t {\n"));
}

#[test]
fn unknown_peripheral_fails() {
    let out = svd2bitfilled().args([SVD, "SPI1"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Peripheral SPI1 not found in the SVD file"));
}

#[test]
fn missing_peripheral_fails() {
    let out = svd2bitfilled().arg(SVD).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Peripheral name must be provided"));
}
