use remio::wire::{
    Argument, Request, Response, decode_length_prefixed, encode_length_prefixed,
};

#[test]
fn requests_roundtrip_through_the_length_prefixed_frame() {
    let request = Request {
        service: "Telemetry".to_string(),
        procedure: "get_reading".to_string(),
        arguments: vec![Argument {
            position: 0,
            value: vec![3, b'c', b'h', b'0'],
        }],
    };
    let frame = encode_length_prefixed(&request);
    let decoded: Request =
        decode_length_prefixed(&mut frame.as_slice()).expect("frame decodes");
    assert_eq!(decoded, request);
}

#[test]
fn empty_response_decodes_with_no_error_and_no_return_value() {
    let frame = encode_length_prefixed(&Response::default());
    let decoded: Response =
        decode_length_prefixed(&mut frame.as_slice()).expect("frame decodes");
    assert_eq!(decoded.error, None);
    assert_eq!(decoded.return_value, None);
}

#[test]
fn server_error_descriptions_survive_verbatim() {
    let response = Response {
        error: Some("divide by zero in Telemetry.get_reading".to_string()),
        return_value: None,
    };
    let frame = encode_length_prefixed(&response);
    let decoded: Response =
        decode_length_prefixed(&mut frame.as_slice()).expect("frame decodes");
    assert_eq!(decoded, response);
}

#[test]
fn argument_positions_are_preserved_sparsely() {
    // Positions 0 and 3 present, 1 and 2 omitted: numbering is unaffected.
    let request = Request {
        service: "s".to_string(),
        procedure: "p".to_string(),
        arguments: vec![
            Argument {
                position: 0,
                value: vec![1],
            },
            Argument {
                position: 3,
                value: vec![2],
            },
        ],
    };
    let frame = encode_length_prefixed(&request);
    let decoded: Request =
        decode_length_prefixed(&mut frame.as_slice()).expect("frame decodes");
    assert_eq!(decoded.arguments[0].position, 0);
    assert_eq!(decoded.arguments[1].position, 3);
}
