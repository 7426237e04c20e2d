use tracing::{error, info, span, Level};
use tracing_subscriber::EnvFilter;

mod adapters;
mod listing;
mod model;
mod presign;
mod util;

fn cli() -> clap::Command {
    clap::Command::new("imagesign")
        .version(clap::crate_version!())
        .about("Generate presigned GET URLs for the images in a bucket")
        .arg(
            clap::Arg::new("BUCKET")
                .help("Bucket name, or s3://bucket / gs://bucket")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("expiry")
                .long("expiry")
                .help("Expiry seconds for presigned URLs, at most one week")
                .value_parser(clap::value_parser!(u64).range(1..=presign::MAX_EXPIRY_SECS))
                .default_value("3600"),
        )
        .arg(
            clap::Arg::new("prefix")
                .long("prefix")
                .help("Only consider keys under this prefix")
                .default_value(""),
        )
}

fn build_client(
    provider: &util::object::Provider,
) -> Result<Box<dyn adapters::ObjectAdapter>, model::object::StoreError> {
    match provider {
        util::object::Provider::AWS => {
            let config = util::poll::poll_until_ready(aws_config::load_from_env());
            Ok(Box::new(aws_sdk_s3::Client::new(&config)))
        }
        util::object::Provider::GCS => {
            let config = util::poll::poll_until_ready(
                google_cloud_storage::client::ClientConfig::default().with_auth(),
            )
            .map_err(|err| model::object::StoreError {
                message: format!("failed to load gcs credentials: {}", err),
            })?;

            Ok(Box::new(google_cloud_storage::client::Client::new(config)))
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();
    info!("called");

    let matches = cli().get_matches();

    let bucket_uri = matches
        .get_one::<String>("BUCKET")
        .map(String::as_str)
        .unwrap_or_default();
    let expiry_secs = matches
        .get_one::<u64>("expiry")
        .copied()
        .unwrap_or(presign::DEFAULT_EXPIRY_SECS);
    let prefix = matches
        .get_one::<String>("prefix")
        .map(String::as_str)
        .unwrap_or_default();
    info!(bucket = bucket_uri, expiry_secs, prefix = prefix, "args");

    let (provider, bucket) = match util::object::parse_bucket_uri(bucket_uri) {
        Err(err) => {
            error!(error_message = %err, error_group = "parse_bucket");
            println!("{}", err);
            return;
        }
        Ok(parsed) => parsed,
    };

    let client = match build_client(&provider) {
        Err(err) => {
            error!(error_message = %err, error_group = "build_client");
            println!("{}", err);
            return;
        }
        Ok(client) => client,
    };

    let signer = presign::ImageSigner::new(client, bucket).with_prefix(prefix);
    let result = signer.generate_presigned_urls(expiry_secs);

    print!("{}", presign::format_report(bucket, &result));
}
