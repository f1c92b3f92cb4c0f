//! Label-fetch round trips against the mock provider.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use smartpost_client::SmartpostError;

    use crate::test_client;

    // Enough of a PDF header to prove the bytes come back untouched.
    const PDF_STUB: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\nlabel";

    #[test]
    fn test_should_fetch_label_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/")
                .query_param("request", "labels");
            then.status(200).body(PDF_STUB);
        });

        let client = test_client(&server);
        let bytes = client
            .labels("A5", &["EE100000001EE"])
            .expect("labels should succeed");

        mock.assert();
        assert_eq!(&bytes[..], PDF_STUB);
    }

    #[test]
    fn test_should_send_format_and_barcodes_in_caller_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/").body_contains(
                "<format>A6-4</format>\
                 <barcode>BC2</barcode><barcode>BC1</barcode><barcode>BC2</barcode>",
            );
            then.status(200).body(PDF_STUB);
        });

        let client = test_client(&server);
        client
            .labels("A6-4", &["BC2", "BC1", "BC2"])
            .expect("labels should succeed");

        mock.assert();
    }

    #[test]
    fn test_should_accept_every_allowed_format() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/")
                .query_param("request", "labels");
            then.status(200).body(PDF_STUB);
        });

        let client = test_client(&server);
        for format in smartpost_client::LABEL_FORMATS {
            client
                .labels(format, &["EE100000001EE"])
                .unwrap_or_else(|e| panic!("format {format} should succeed: {e}"));
        }

        assert_eq!(mock.hits(), smartpost_client::LABEL_FORMATS.len());
    }

    #[test]
    fn test_should_reject_unknown_format_without_any_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/");
            then.status(200).body(PDF_STUB);
        });

        let client = test_client(&server);
        let err = client.labels("Z9", &["123"]).expect_err("must fail");

        assert!(matches!(err, SmartpostError::InvalidInput(_)));
        assert_eq!(mock.hits(), 0);
    }

    #[test]
    fn test_should_surface_provider_rejection_for_unknown_barcode() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/");
            then.status(404).body("No such barcode");
        });

        let client = test_client(&server);
        let err = client.labels("A5", &["NOPE"]).expect_err("must fail");

        match err {
            SmartpostError::Provider { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "No such barcode");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }
}
