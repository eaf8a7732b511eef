use clap::Parser;
use eyre::{eyre, Result, WrapErr};
use stockx_client::{ClientConfig, ClientProvider};
use tracing_subscriber::EnvFilter;

/// Search StockX and print the market data of the first hit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Free text search query
    query: String,
    /// Number of search results to request
    #[arg(long, default_value_t = 10)]
    limit: usize,
    /// Currency of the prices, overrides STOCKX_CURRENCY
    #[arg(long)]
    currency: Option<String>,
    /// Market country code, overrides STOCKX_LOCALE
    #[arg(long)]
    locale: Option<String>,
    /// Request prices for a VAT registered account
    #[arg(long)]
    vat_registered: bool,
    /// Proxy url, overrides STOCKX_PROXY
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stockx_client=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to initialize tracing: {e}"))?;

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(currency) = &args.currency {
        config.currency = currency.clone();
    }
    if let Some(locale) = &args.locale {
        config.locale = locale.clone();
    }
    config.vat_registered |= args.vat_registered;
    if let Some(proxy) = args.proxy {
        config = config.with_proxy(proxy);
    }

    let provider = ClientProvider::new();
    let client = provider.provide(config)?;

    let results = client
        .search_products(&args.query, args.limit)
        .await
        .wrap_err_with(|| format!("search for {:?} failed", args.query))?;
    println!("{:#?}", results);

    let Some(first) = results.first() else {
        println!("did not find any product for search query {}", args.query);
        return Ok(());
    };

    let details = client.get_product(&first.product_identifier).await?;
    if details.is_empty() {
        println!("no market data for {}", first.product_identifier);
    } else {
        println!("{:#?}", details);
    }
    Ok(())
}
