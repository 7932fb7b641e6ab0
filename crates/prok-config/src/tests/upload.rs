use crate::UploadConfig;

#[test]
fn defaults_match_expected_pipeline_settings() {
    let upload = UploadConfig::default();

    assert!(upload.validate().is_ok());
    assert_eq!(upload.max_upload_bytes, 2 * 1024 * 1024);
    assert_eq!(
        upload.allowed_extensions,
        vec!["png", "jpg", "jpeg", "gif", "webp"]
    );
    assert_eq!(
        (upload.primary_max_width, upload.primary_max_height),
        (400, 400)
    );
    assert_eq!(
        (upload.thumbnail_max_width, upload.thumbnail_max_height),
        (128, 128)
    );
}

#[test]
fn zero_size_ceiling_is_rejected() {
    let upload = UploadConfig {
        max_upload_bytes: 0,
        ..UploadConfig::default()
    };

    assert!(upload.validate().is_err());
}

#[test]
fn out_of_range_quality_is_rejected() {
    for quality in [0, 101] {
        let upload = UploadConfig {
            thumbnail_quality: quality,
            ..UploadConfig::default()
        };

        assert!(upload.validate().is_err());
    }
}

#[test]
fn empty_extension_allow_list_is_rejected() {
    let upload = UploadConfig {
        allowed_extensions: Vec::new(),
        ..UploadConfig::default()
    };

    assert!(upload.validate().is_err());
}
