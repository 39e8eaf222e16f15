//! Demonstrates an STK push against a local mock gateway: the client authorizes on first use,
//! derives the checkout password, and reuses the cached bearer token for the status query.

// crates.io
use color_eyre::{Result, eyre::eyre};
use httpmock::prelude::*;
use time::OffsetDateTime;
use url::Url;
// self
use daraja::{
	client::Daraja,
	config::{Config, Environment},
	payload::{StkPushQueryRequest, StkPushRequest},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/v1/generate").query_param("grant_type", "client_credentials");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"expires_in\":\"3599\"}");
		})
		.await;
	let push_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/stkpush/v1/processrequest")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"MerchantRequestID\":\"29115-34620561-1\",\"CheckoutRequestID\":\"ws_CO_191220191020363925\",\"ResponseCode\":\"0\",\"ResponseDescription\":\"Success. Request accepted for processing\",\"CustomerMessage\":\"Success. Request accepted for processing\"}",
			);
		})
		.await;
	let query_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/mpesa/stkpushquery/v1/query")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"CheckoutRequestID\":\"ws_CO_191220191020363925\",\"ResponseCode\":\"0\",\"ResultCode\":\"0\",\"ResultDesc\":\"The service request is processed successfully.\"}",
			);
		})
		.await;
	let config = Config::builder(Environment::Sandbox)
		.base_url(Url::parse(&server.base_url())?)
		.consumer_key("demo-consumer-key")
		.consumer_secret("demo-consumer-secret")
		.shortcode("174379")
		.passkey("demo-passkey")
		.build()?;
	let client = Daraja::new(config)?;
	let password = client.stk_password(OffsetDateTime::now_utc())?;
	let push = client
		.stk_push(
			&StkPushRequest {
				business_short_code: "174379".into(),
				transaction_type: "CustomerPayBillOnline".into(),
				amount: "1".into(),
				party_a: "254708374149".into(),
				party_b: "174379".into(),
				phone_number: "254708374149".into(),
				callback_url: "https://example.com/callback".into(),
				account_reference: "demo-invoice".into(),
				transaction_desc: "Demo checkout".into(),
				..Default::default()
			}
			.with_password(&password),
		)
		.await;

	if !push.success {
		return Err(eyre!("STK push failed: {:?}.", push.errors));
	}

	println!("Checkout request accepted: {}.", push.response.checkout_request_id);

	let query = client
		.query_stk_push(
			&StkPushQueryRequest {
				business_short_code: "174379".into(),
				checkout_request_id: push.response.checkout_request_id.clone(),
				..Default::default()
			}
			.with_password(&password),
		)
		.await;

	println!("Checkout result: {} ({}).", query.response.result_desc, query.response.result_code);

	token_mock.assert_async().await;
	push_mock.assert_async().await;
	query_mock.assert_async().await;

	Ok(())
}
