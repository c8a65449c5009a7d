use debstrap_step::StepError;
use debstrap_step::arch::{Architecture, DebianArch, resolve};

#[test]
fn test_resolve_supported_architectures() {
    let cases = [
        ("amd64", DebianArch::Amd64, "amd64"),
        ("arm64", DebianArch::Arm64, "arm64"),
        ("armv7", DebianArch::Armhf, "armhf"),
        ("arm", DebianArch::Armel, "armel"),
    ];

    for (token, expected, name) in cases {
        let resolved = resolve(token).unwrap_or_else(|e| panic!("{} should resolve: {}", token, e));
        assert_eq!(resolved, expected, "wrong mapping for {}", token);
        assert_eq!(resolved.to_string(), name);
    }
}

#[test]
fn test_resolve_unsupported_architecture() {
    for token in ["mips", "i386", "armhf", "x86_64", ""] {
        match resolve(token) {
            Err(StepError::UnsupportedArchitecture(value)) => assert_eq!(value, token),
            other => panic!("expected UnsupportedArchitecture for {:?}, got {:?}", token, other),
        }
    }
}

#[test]
fn test_resolve_is_case_sensitive() {
    for token in ["AMD64", "Arm64", "ARMV7", " arm"] {
        assert!(
            matches!(resolve(token), Err(StepError::UnsupportedArchitecture(_))),
            "{:?} should be rejected",
            token
        );
    }
}

#[test]
fn test_unsupported_architecture_message_names_value() {
    let err = Architecture::parse("riscv64").unwrap_err();
    assert!(err.to_string().contains("riscv64"));
}
