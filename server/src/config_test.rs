use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some(" 3001 ")).unwrap(), 3001);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value, .. } if value == "eighty"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let cfg = ServerConfig { port: 9090 };
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:9090");
}
