//! 错误情况测试

use idiom_slides::error::IdiomError;
use idiom_slides::export::run_export;
use idiom_slides_common::LayoutConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

/// 不存在的 CSV
#[test]
fn test_missing_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out.pptx");
    let mut rng = StdRng::seed_from_u64(1);

    let result = run_export(
        &dir.path().join("missing.csv"),
        &output,
        LayoutConfig::default(),
        "测试",
        &mut rng,
    );

    assert!(matches!(
        result,
        Err(IdiomError::Common(idiom_slides_common::Error::FileRead { .. }))
    ));
    assert!(!output.exists());
}

/// 非 UTF-8 的 CSV
#[test]
fn test_invalid_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("gbk.csv");
    std::fs::write(&csv, [0xbb, 0xad, 0xc9, 0xdf, b'\n']).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let result = run_export(&csv, &dir.path().join("out.pptx"), LayoutConfig::default(), "测试", &mut rng);
    assert!(matches!(
        result,
        Err(IdiomError::Common(idiom_slides_common::Error::FileRead { .. }))
    ));
}

/// 无法写入的目标
#[test]
fn test_unwritable_destination() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("idioms.csv");
    std::fs::write(&csv, "画蛇添足\n").unwrap();
    let output = dir.path().join("no_such_dir").join("out.pptx");
    let mut rng = StdRng::seed_from_u64(1);

    let result = run_export(&csv, &output, LayoutConfig::default(), "测试", &mut rng);
    assert!(matches!(
        result,
        Err(IdiomError::Common(idiom_slides_common::Error::FileWrite { .. }))
    ));
}

/// 字号超出范围
#[test]
fn test_render_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("idioms.csv");
    std::fs::write(&csv, "画蛇添足\n").unwrap();
    let layout = LayoutConfig {
        font_size: 5000,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let result = run_export(&csv, &dir.path().join("out.pptx"), layout, "测试", &mut rng);
    assert!(matches!(
        result,
        Err(IdiomError::Common(idiom_slides_common::Error::Render(_)))
    ));
}

/// IdiomError的Display实现确认
#[test]
fn test_error_display() {
    let errors = vec![
        IdiomError::Config("测试配置错误".to_string()),
        IdiomError::Prompt("not a terminal".to_string()),
        IdiomError::Cancelled("out.pptx".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "错误信息为空: {:?}", err);
    }
}

/// 透明包装的公共错误
#[test]
fn test_common_error_transparent() {
    let common_err = idiom_slides_common::Error::Render("字号必须在 1～4000 pt 之间: 0".to_string());
    let err: IdiomError = common_err.into();

    assert!(matches!(err, IdiomError::Common(_)));
    assert!(format!("{}", err).contains("字号"));
}

/// IO错误的转换
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: IdiomError = io_err.into();

    assert!(matches!(err, IdiomError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// 含控制字符的成语无法写入文档
#[test]
fn test_control_character_in_csv_is_render_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("idioms.csv");
    std::fs::write(&csv, "画蛇\u{1}添足\n").unwrap();
    let output = dir.path().join("out.pptx");
    let mut rng = StdRng::seed_from_u64(1);

    let result = run_export(&csv, &output, LayoutConfig::default(), "测试", &mut rng);
    assert!(matches!(
        result,
        Err(IdiomError::Common(idiom_slides_common::Error::Render(_)))
    ));
    assert!(!output.exists());
}
