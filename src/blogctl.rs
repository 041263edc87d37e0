// src/blogctl.rs
//! Command-line client for the blog API.
//!
//! Drives the same editor workflow the browser client runs: compose,
//! save a draft, or take a blog through the publish form.
//!
//! ```text
//! blogctl signup <fullname> <email> <password>
//! blogctl signin <email> <password>
//! blogctl latest
//! blogctl trending
//! blogctl draft <title> [content.json]
//! blogctl publish <title> <banner.jpeg> <description> <tag,tag,..> <content.json>
//! ```
//!
//! Environment: BLOG_API_URL (default http://localhost:8080); draft and
//! publish sign in with BLOG_EMAIL / BLOG_PASSWORD.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dotenv::dotenv;

use blog_api::blogs::models::Document;
use blog_api::client::{ApiClient, EditorWorkflow, Session, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url = env::var("BLOG_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let api = ApiClient::new(base_url);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "signup" => {
            let [fullname, email, password] = expect_args(&args)?;
            let session = api.signup(fullname, email, password).await?;
            print_session(&session);
        }
        "signin" => {
            let [email, password] = expect_args(&args)?;
            let session = api.signin(email, password).await?;
            print_session(&session);
        }
        "latest" => {
            let feed = api.latest_blogs().await?;
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        "trending" => {
            let feed = api.trending_blogs().await?;
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        "draft" => {
            let title = args.get(1).context("usage: blogctl draft <title> [content.json]")?;
            let content = match args.get(2) {
                Some(path) => read_document(path)?,
                None => Document::default(),
            };
            let session = signin_from_env(&api).await?;

            let mut workflow = EditorWorkflow::new();
            workflow.set_title(title);

            match workflow.save_draft(&api, &session, content).await? {
                SubmitOutcome::Created { id } => {
                    println!("Saved draft {}", id);
                    navigate_home().await;
                }
                SubmitOutcome::Ignored => println!("A save is already in progress"),
            }
        }
        "publish" => {
            let [title, banner_path, des, tags, content_path] = expect_args(&args)?;
            let content = read_document(content_path)?;
            let session = signin_from_env(&api).await?;

            let mut workflow = EditorWorkflow::new();
            workflow.set_title(title);

            let image = std::fs::read(banner_path)
                .with_context(|| format!("failed to read banner image {}", banner_path))?;
            let banner_url = workflow.upload_banner(&api, image).await?;
            println!("Banner uploaded: {}", banner_url);

            workflow.enter_publish(content)?;
            workflow.set_description(des);
            for tag in tags.split(',') {
                let mut input = tag.to_string();
                if let Err(e) = workflow.submit_tag(&mut input) {
                    eprintln!("{}", e);
                }
            }

            match workflow.publish(&api, &session).await? {
                SubmitOutcome::Created { id } => {
                    println!("Published successfully: {}", id);
                    navigate_home().await;
                }
                SubmitOutcome::Ignored => println!("A publish is already in progress"),
            }
        }
        _ => {
            eprintln!(
                "usage: blogctl <signup|signin|latest|trending|draft|publish> ..."
            );
        }
    }

    Ok(())
}

fn expect_args<const N: usize>(args: &[String]) -> Result<[&String; N]> {
    let operands = &args[1..];
    if operands.len() < N {
        bail!("expected {} arguments, got {}", N, operands.len());
    }
    let mut out = [&args[0]; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = &operands[i];
    }
    Ok(out)
}

fn read_document(path: &str) -> Result<Document> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid editor document in {}", path))
}

async fn signin_from_env(api: &ApiClient) -> Result<Session> {
    let email = env::var("BLOG_EMAIL").context("BLOG_EMAIL not set")?;
    let password = env::var("BLOG_PASSWORD").context("BLOG_PASSWORD not set")?;
    Ok(api.signin(&email, &password).await?)
}

fn print_session(session: &Session) {
    println!("Signed in as {} (@{})", session.fullname, session.username);
    println!("access_token: {}", session.access_token);
}

/// The browser client returns to the home page a moment after a successful
/// save; mirror the pause before handing the terminal back
async fn navigate_home() {
    tokio::time::sleep(Duration::from_secs(1)).await;
    println!("Done.");
}
