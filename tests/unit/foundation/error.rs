use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpritelyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SpritelyError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        SpritelyError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpritelyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
