//! Shipment-creation round trips against the mock provider.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use smartpost_client::SmartpostError;

    use crate::{locker_item, test_client};

    const TWO_ITEM_RESPONSE: &str = "<orders>\
        <item>\
            <barcode>EE100000001EE</barcode>\
            <reference>ORDER-1</reference>\
            <sender><doorcode>D1</doorcode></sender>\
        </item>\
        <item>\
            <barcode>EE100000002EE</barcode>\
            <reference>ORDER-2</reference>\
        </item>\
    </orders>";

    #[test]
    fn test_should_create_shipment_and_parse_confirmations() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/")
                .query_param("request", "shipment");
            then.status(200).body(TWO_ITEM_RESPONSE);
        });

        let client = test_client(&server);
        let items = [locker_item("ORDER-1"), locker_item("ORDER-2")];
        let sent = client.shipment(&items, &[]).expect("shipment should succeed");

        mock.assert();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].barcode, "EE100000001EE");
        assert_eq!(sent[0].reference, "ORDER-1");
        assert_eq!(sent[0].door_code.as_deref(), Some("D1"));
        assert_eq!(sent[1].barcode, "EE100000002EE");
        assert!(sent[1].door_code.is_none());
    }

    #[test]
    fn test_should_send_authentication_as_first_child() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/").body_contains(
                "<orders><authentication>\
                 <user>apiuser</user><password>apipass</password>\
                 </authentication><report>",
            );
            then.status(200).body("<orders></orders>");
        });

        let client = test_client(&server);
        client
            .shipment(&[locker_item("ORDER-1")], &[])
            .expect("shipment should succeed");

        mock.assert();
    }

    #[test]
    fn test_should_send_report_emails_and_items_in_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/")
                .body_contains("<report><email>a@example.com</email><email>b@example.com</email></report>")
                .body_contains("<reference>ORDER-1</reference>")
                .body_contains("<reference>ORDER-2</reference>");
            then.status(200).body("<orders></orders>");
        });

        let client = test_client(&server);
        let items = [locker_item("ORDER-1"), locker_item("ORDER-2")];
        client
            .shipment(&items, &["a@example.com", "b@example.com"])
            .expect("shipment should succeed");

        mock.assert();
    }

    #[test]
    fn test_should_reject_six_report_emails_without_any_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/");
            then.status(200).body("<orders></orders>");
        });

        let client = test_client(&server);
        let emails = [
            "a@example.com",
            "b@example.com",
            "c@example.com",
            "d@example.com",
            "e@example.com",
            "f@example.com",
        ];
        let err = client
            .shipment(&[locker_item("ORDER-1")], &emails)
            .expect_err("must fail");

        assert!(matches!(err, SmartpostError::InvalidInput(_)));
        assert_eq!(mock.hits(), 0);
    }

    #[test]
    fn test_should_surface_provider_rejection_with_raw_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/");
            then.status(401)
                .body("<error>Invalid user or password</error>");
        });

        let client = test_client(&server);
        let err = client
            .shipment(&[locker_item("ORDER-1")], &[])
            .expect_err("must fail");

        match err {
            SmartpostError::Provider { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "<error>Invalid user or password</error>");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_should_fail_on_malformed_response_xml() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/");
            then.status(200).body("<orders><item>");
        });

        let client = test_client(&server);
        let err = client
            .shipment(&[locker_item("ORDER-1")], &[])
            .expect_err("must fail");

        assert!(matches!(err, SmartpostError::Xml(_)));
    }

    #[test]
    fn test_should_surface_connection_failure_as_transport_error() {
        // Nothing listens on port 9; the connection is refused before any
        // provider interaction.
        let client = smartpost_client::SmartpostClient::builder("apiuser", "apipass")
            .base_url("http://127.0.0.1:9/api/")
            .build()
            .expect("client should build");

        let err = client
            .shipment(&[locker_item("ORDER-1")], &[])
            .expect_err("must fail");

        assert!(matches!(err, SmartpostError::Transport(_)));
    }
}
