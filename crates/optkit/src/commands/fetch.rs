use crate::prelude::{eprintln, println, *};
use optkit::{fetch_with_option, HttpRequest, Maybe};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FetchOptions {
    /// URL to request
    #[clap(env = "OPTKIT_URL")]
    pub url: String,

    /// HTTP method (default: GET)
    #[arg(short = 'X', long, env = "OPTKIT_METHOD")]
    pub method: Option<String>,

    /// Extra header as 'Name: value'; may be repeated
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short = 'd', long)]
    pub body: Option<String>,
}

pub async fn run(options: FetchOptions, global: crate::Global) -> Result<()> {
    let request = build_request(options)?;

    if global.verbose {
        eprintln!(
            "{} {}",
            optkit::http::request_method(&request),
            request.url
        );
        for (name, value) in optkit::http::merged_headers(&request) {
            eprintln!("{name}: {value}");
        }
    }

    let client = reqwest::Client::new();
    let result: Maybe<serde_json::Value> = fetch_with_option(&client, &request).await;

    if global.verbose && result.is_none() {
        eprintln!("Request produced no value");
    }

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{}", json);

    Ok(())
}

fn build_request(options: FetchOptions) -> Result<HttpRequest> {
    let mut request = HttpRequest::new(options.url);

    for line in &options.headers {
        let (name, value) = optkit::http::parse_header_line(line).map_err(|e| eyre!("{}", e))?;
        request = request.header(name, value);
    }

    if let Some(method) = options.method {
        request = request.method(method);
    }
    if let Some(body) = options.body {
        request = request.body(body);
    }

    Ok(request)
}
