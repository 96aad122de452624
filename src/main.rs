use clap::{Parser, Subcommand};
use model::{
    cli_error::CliError,
    cli_output::{CliResult, OutputFormat},
    exit_code::ExitCode,
};
use reqwest::Url;
use services::wf_api::WriteFreelyClient;

mod auth_store;
mod model;
mod services;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
    /// Set the output format
    #[clap(arg_enum, short, long, default_value_t=OutputFormat::Tsv)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Login to the WriteFreely instance at the provided URI with an access token
    Login {
        /// The URI of your WriteFreely instance, e.g. https://write.example.com
        instance_uri: Url,
        /// Your access token, generated on the account settings page
        token: String,
    },
    /// Create a collection (blog) on the instance
    CreateCollection {
        /// The URI of your WriteFreely instance, e.g. https://write.example.com
        instance_uri: Url,
        /// The title to give the collection
        title: String,
        /// The alias for the collection; the server generates one if omitted
        #[clap(short, long)]
        alias: Option<String>,
    },
    /// Fetch a collection by its alias
    GetCollection {
        /// The URI of your WriteFreely instance, e.g. https://write.example.com
        instance_uri: Url,
        /// The alias of the collection
        alias: String,
    },
    /// Delete a collection and all its posts
    DeleteCollection {
        /// The URI of your WriteFreely instance, e.g. https://write.example.com
        instance_uri: Url,
        /// The alias of the collection
        alias: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let format = &cli.format;

    match cli.command {
        Commands::Login {
            instance_uri,
            token,
        } => {
            CliResult::new(
                auth_store::set(instance_uri.as_str(), &token),
                ExitCode::SetAuthToken,
            )
            .exit();
        }
        Commands::CreateCollection {
            instance_uri,
            title,
            alias,
        } => {
            let result: Result<_, CliError> = (|| async {
                let client = WriteFreelyClient::new(instance_uri.clone())?;
                client.create_collection(title, alias).await
            })()
            .await;

            CliResult::new(result, ExitCode::Api).print_or_exit(format);
        }
        Commands::GetCollection {
            instance_uri,
            alias,
        } => {
            let result: Result<_, CliError> = (|| async {
                let client = WriteFreelyClient::new(instance_uri.clone())?;
                client.get_collection(&alias).await
            })()
            .await;

            CliResult::new(result, ExitCode::Api).print_or_exit(format);
        }
        Commands::DeleteCollection {
            instance_uri,
            alias,
        } => {
            let result: Result<(), CliError> = (|| async {
                let client = WriteFreelyClient::new(instance_uri.clone())?;
                println!("Deleting collection {alias}");
                client.delete_collection(&alias).await?;
                println!("Deleted collection {alias}");
                Ok(())
            })()
            .await;

            CliResult::new(result, ExitCode::Api).print_or_exit(format);
        }
    }
}
