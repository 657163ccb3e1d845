// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for the neighbor-discovery (spark) portion of a routing daemon's
//! admin API.
//!
//! Calls are blocking: each one issues a single request and waits for the
//! daemon to answer or for the transport to fail. No retries are attempted.

use reqwest::blocking::Response;
use reqwest::Method;
use slog::Logger;
use spark_types::NeighborRecord;
use std::time::Duration;

pub use reqwest::StatusCode;
pub use spark_types as types;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("daemon returned {status}: {message}")]
    Remote {
        status: StatusCode,
        message: String,
    },
}

/// The operations the administration commands need from a daemon.
pub trait SparkCtrl {
    /// Fetch a snapshot of all discovered neighbors.
    fn get_neighbors(&self) -> Result<Vec<NeighborRecord>, Error>;

    /// Ask the daemon to flood a graceful restart message to all neighbors.
    fn flood_restarting_msg(&self) -> Result<(), Error>;
}

pub struct Client {
    baseurl: String,
    client: reqwest::blocking::Client,
    log: Logger,
}

impl Client {
    pub fn new(baseurl: &str, log: Logger) -> Self {
        Self {
            baseurl: baseurl.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            log,
        }
    }

    pub fn new_with_timeout(
        baseurl: &str,
        timeout: Duration,
        log: Logger,
    ) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            baseurl: baseurl.trim_end_matches('/').to_string(),
            client,
            log,
        })
    }

    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }

    fn send(&self, method: Method, path: &str) -> Result<Response, Error> {
        let request = self
            .client
            .request(method, format!("{}{}", self.baseurl, path))
            .build()?;
        slog::trace!(self.log, "client request";
            "method" => %request.method(),
            "uri" => %request.url(),
        );

        let result = self.client.execute(request);
        slog::trace!(self.log, "client response"; "result" => ?result);

        let response = result?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Remote { status, message });
        }
        Ok(response)
    }
}

impl SparkCtrl for Client {
    fn get_neighbors(&self) -> Result<Vec<NeighborRecord>, Error> {
        Ok(self.send(Method::GET, "/spark/neighbors")?.json()?)
    }

    fn flood_restarting_msg(&self) -> Result<(), Error> {
        self.send(Method::POST, "/spark/flood-restarting-msg")?;
        Ok(())
    }
}
