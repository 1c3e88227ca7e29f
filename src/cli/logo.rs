//! Handler for the `logo` command.
//!
//! Always fetches the text concept; `--image` additionally renders the
//! logo and writes the decoded bytes to `--output` or to a file named
//! after the company.

use std::path::PathBuf;

use crate::api::{Backend, BackendClient, LogoDescription, LogoRequest};
use crate::cli::{output, Cli, LogoArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the logo command.
pub async fn execute(cli: &Cli, args: &LogoArgs) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let backend = BackendClient::from_config(&config.backend)?;

    let request = LogoRequest {
        company_name: args.company_name.clone(),
        style: args.style.clone(),
        colors: args
            .colors
            .split(',')
            .map(|color| color.trim().to_string())
            .filter(|color| !color.is_empty())
            .collect(),
    };

    let spinner = output::spinner(&format!("Designing a logo for {}", request.company_name));
    let description = match backend.generate_logo(&request).await {
        Ok(description) => {
            output::spinner_success(&spinner, &description.company_name);
            description
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Logo generation failed");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(serde_json::to_value(&description)?);
    } else {
        print_description(&description);
    }

    if args.image {
        render_image(&backend, &request, args).await?;
    }

    Ok(())
}

async fn render_image(
    backend: &BackendClient,
    request: &LogoRequest,
    args: &LogoArgs,
) -> Result<()> {
    let spinner = output::spinner("Rendering the logo image");
    let image = match backend.generate_logo_image(request).await {
        Ok(image) => image,
        Err(err) => {
            output::spinner_fail(&spinner, "Image rendering failed");
            return Err(err);
        }
    };

    if !image.result.success {
        output::spinner_fail(&spinner, "Image rendering failed");
        if let Some(error) = &image.result.error {
            output::warning(error);
        }
        if let Some(fallback) = &image.result.fallback_description {
            output::lines(fallback);
        }
        return Ok(());
    }

    let decoded = match image.result.decoded_image() {
        Ok(decoded) => decoded,
        Err(err) => {
            output::spinner_fail(&spinner, "Image payload was not valid base64");
            return Err(err);
        }
    };

    match decoded {
        Some(bytes) => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| image_file_name(&image.company_name));
            std::fs::write(&path, bytes)?;
            output::spinner_success(&spinner, &format!("Wrote {}", path.display()));
        }
        None => match &image.result.image_url {
            Some(url) => {
                output::spinner_success(&spinner, "Image hosted remotely");
                output::field("URL", url);
            }
            None => {
                output::spinner_fail(&spinner, "Backend returned no image payload");
            }
        },
    }

    Ok(())
}

/// Print a logo description, preferring the structured JSON form.
///
/// Backends sometimes wrap the JSON in prose; [`LogoDescription::structured`]
/// digs it out. When there is no JSON at all the raw text is printed as-is.
pub fn print_description(description: &LogoDescription) {
    match description.structured() {
        Some(value) => {
            if let Some(object) = value.as_object() {
                for (key, field) in object {
                    match field.as_str() {
                        Some(text) => output::field(key, text),
                        None => output::field(key, field),
                    }
                }
            }
        }
        None => output::lines(&description.logo_description),
    }
}

/// Derive a file name for a rendered logo from the company name.
///
/// Lowercases, squeezes runs of separator characters to a single dash
/// and appends `.png`. Falls back to `logo.png` when nothing printable
/// survives.
pub fn image_file_name(company: &str) -> PathBuf {
    let mut stem = String::new();
    for c in company.chars() {
        if c.is_alphanumeric() {
            stem.extend(c.to_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    if stem.is_empty() {
        PathBuf::from("logo.png")
    } else {
        PathBuf::from(format!("{stem}.png"))
    }
}
