// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a real fire on a real cloud account.
//!
//! These tests require a live account and are ignored by default.
//! Run with: `cargo test --test live_cloud -- --ignored --test-threads=1`
//!
//! # Environment Variables
//!
//! - `EMBERLINK_TOKEN` - a valid bearer token
//! - `EMBERLINK_FIRE_SERIAL` - serial of a fire on the account
//! - `EMBERLINK_BASE_URL` - optional, overrides the production endpoint
//!
//! # Example
//!
//! ```bash
//! export EMBERLINK_TOKEN=eyJ0eXAi...
//! export EMBERLINK_FIRE_SERIAL=3FB7A2C4D9
//! cargo test --test live_cloud -- --ignored --test-threads=1
//! ```

use std::env;

use emberlink::{Fireplace, FireplaceBuilder};

fn builder_from_env() -> FireplaceBuilder {
    let serial = env::var("EMBERLINK_FIRE_SERIAL").expect("EMBERLINK_FIRE_SERIAL not set");
    let token = env::var("EMBERLINK_TOKEN").expect("EMBERLINK_TOKEN not set");

    let mut builder = Fireplace::cloud(serial)
        .expect("invalid fire serial")
        .with_token(token);
    if let Ok(base_url) = env::var("EMBERLINK_BASE_URL") {
        builder = builder.with_base_url(base_url);
    }
    builder
}

#[tokio::test]
#[ignore = "requires a live cloud account"]
async fn probe_reports_features_and_state() {
    let (fireplace, state) = builder_from_env().build().await.unwrap();

    println!("features: {:?}", fireplace.features());
    println!("mode: {:?}", state.mode());
    println!("firmware: {:?}", state.firmware());
    println!("unrecognized tags: {}", state.unrecognized().len());

    assert!(state.refreshed_at().is_some());
}

#[tokio::test]
#[ignore = "requires a live cloud account"]
async fn refresh_is_stable() {
    let (fireplace, first) = builder_from_env().build().await.unwrap();
    let second = fireplace.refresh().await.unwrap();

    // Two back-to-back reads should agree on the static fields.
    assert_eq!(first.firmware(), second.firmware());
    assert_eq!(first.mode(), second.mode());
}
