//! Subcommands and their mapping onto SDK calls.

use clap::Subcommand;
use serde_json::Value;
use zinari_sdk::ZinariClient;
use zinari_sdk::objects::{
    CreateTransactionRequest, Cryptocurrency, Details, ExchangeRateRequest,
    ListTransactionsRequest, PaymentLinkRequest, WithdrawRequest,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the exchange rate for a currency pair
    ExchangeRate {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Generate a hosted payment link
    Paylink {
        /// Fiat amount to charge
        #[arg(long)]
        amount: i64,
        /// Customer email for payment notifications
        #[arg(long)]
        email: String,
        /// Extra identifier as key=value, repeatable
        #[arg(long = "detail", value_parser = parse_detail)]
        details: Vec<(String, Value)>,
        #[arg(long)]
        success_uri: Option<String>,
        #[arg(long)]
        failure_uri: Option<String>,
    },

    /// Create a transaction and print its deposit address
    CreateTransaction {
        /// USDT or USDC
        #[arg(long)]
        currency: Cryptocurrency,
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        email: String,
        #[arg(long = "detail", value_parser = parse_detail)]
        details: Vec<(String, Value)>,
    },

    /// Show a single transaction
    Transaction { id: String },

    /// List transactions, production mode unless --dev is given
    Transactions {
        /// List simulated development-mode transactions instead
        #[arg(long)]
        dev: bool,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },

    /// List all app wallets
    Wallets,

    /// Show a single wallet
    Wallet { id: String },

    /// Withdraw from a wallet to an external address
    Withdraw {
        wallet_id: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        amount: f64,
    },
}

impl Command {
    /// Run the command and return the response as JSON.
    pub async fn run(self, client: &ZinariClient) -> anyhow::Result<Value> {
        let value = match self {
            Command::ExchangeRate { from, to } => {
                let rate = client
                    .get_exchange_rate(&ExchangeRateRequest::new(from, to))
                    .await?;
                serde_json::to_value(rate)?
            }
            Command::Paylink {
                amount,
                email,
                details,
                success_uri,
                failure_uri,
            } => {
                let mut request = PaymentLinkRequest::new(amount, email);
                request.details = collect_details(details);
                request.success_redirect_uri = success_uri;
                request.failure_redirect_uri = failure_uri;
                Value::Object(client.get_payment_link(&request).await?)
            }
            Command::CreateTransaction {
                currency,
                amount,
                email,
                details,
            } => {
                let mut request = CreateTransactionRequest::new(currency, amount, email);
                request.details = collect_details(details);
                serde_json::to_value(client.create_transaction(&request).await?)?
            }
            Command::Transaction { id } => serde_json::to_value(client.get_transaction(&id).await?)?,
            Command::Transactions { dev, limit, page } => {
                let request = ListTransactionsRequest::new(limit, page);
                let page = if dev {
                    client.list_dev_transactions(&request).await?
                } else {
                    client.list_transactions(&request).await?
                };
                serde_json::to_value(page)?
            }
            Command::Wallets => serde_json::to_value(client.get_wallets().await?)?,
            Command::Wallet { id } => serde_json::to_value(client.get_wallet(&id).await?)?,
            Command::Withdraw {
                wallet_id,
                address,
                amount,
            } => {
                let request = WithdrawRequest::new(address, amount);
                serde_json::to_value(client.withdraw_from_wallet(&wallet_id, &request).await?)?
            }
        };
        Ok(value)
    }
}

/// Parse `key=value`. The value is read as JSON when it parses, so
/// `count=3` yields a number; anything else stays a string.
fn parse_detail(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn collect_details(pairs: Vec<(String, Value)>) -> Option<Details> {
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.into_iter().collect())
    }
}
