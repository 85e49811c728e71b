//! Streaming command: writes every received record as one line of JSON.

use std::io::Write;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tokio_util::sync::CancellationToken;

use super::args::{Resource, StreamArgs};
use crate::client::HorizonClient;
use crate::config::ClientConfig;
use crate::records::Record;
use crate::request::{
    EffectRequest, LedgerRequest, OperationRequest, StreamRequest, TransactionRequest,
};
use crate::traits::HttpClient;

/// Client configuration for a streaming run.
///
/// Starts from the environment; `--testnet` and `--url` override it, with
/// `--url` taking precedence.
pub fn build_config(args: &StreamArgs) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if args.testnet {
        config = config.with_horizon_url(crate::config::TEST_NET_URL);
    }
    if let Some(url) = &args.url {
        config = config.with_horizon_url(url.as_str());
    }
    config
}

/// Stream the selected resource into `out` until `cancel` fires or the
/// server closes the stream. Returns the number of records written.
pub async fn stream_to<C, W>(
    client: &HorizonClient<C>,
    args: &StreamArgs,
    cancel: CancellationToken,
    out: &mut W,
) -> Result<u64>
where
    C: HttpClient,
    W: Write + Send,
{
    match args.resource {
        Resource::Effects => {
            let request = EffectRequest {
                for_account: args.account.clone(),
                cursor: args.cursor.clone(),
                ..Default::default()
            };
            write_records(client, &request, cancel, out).await
        }
        Resource::Operations | Resource::Payments => {
            let mut request = OperationRequest {
                for_account: args.account.clone(),
                cursor: args.cursor.clone(),
                ..Default::default()
            };
            if args.resource == Resource::Payments {
                request.set_payments_endpoint();
            }
            write_records(client, &request, cancel, out).await
        }
        Resource::Transactions => {
            let request = TransactionRequest {
                for_account: args.account.clone(),
                cursor: args.cursor.clone(),
                ..Default::default()
            };
            write_records(client, &request, cancel, out).await
        }
        Resource::Ledgers => {
            let request = LedgerRequest {
                cursor: args.cursor.clone(),
                ..Default::default()
            };
            write_records(client, &request, cancel, out).await
        }
    }
}

async fn write_records<C, R, W>(
    client: &HorizonClient<C>,
    request: &R,
    cancel: CancellationToken,
    out: &mut W,
) -> Result<u64>
where
    C: HttpClient,
    R: StreamRequest + Sync,
    W: Write + Send,
{
    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;
    let stop = cancel.clone();

    client
        .stream(request, cancel, |record: Record| {
            if write_error.is_some() {
                return;
            }
            match write_line(out, &record) {
                Ok(()) => written += 1,
                Err(e) => {
                    // Output is gone (e.g. closed pipe); stop streaming.
                    write_error = Some(e);
                    stop.cancel();
                }
            }
        })
        .await
        .wrap_err("Streaming failed")?;

    if let Some(e) = write_error {
        return Err(eyre!(e).wrap_err("Failed to write record"));
    }
    Ok(written)
}

fn write_line<W: Write>(out: &mut W, record: &Record) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()
}
