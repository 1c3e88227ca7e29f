//! Session orchestration for `spinel run`.
//!
//! [`App::run`] wires configuration into the store, the backend client,
//! the ad runtime and the screens, then drives the menu loop until the
//! user quits or ctrl-c arrives. Backend failures inside a flow surface
//! as localized alerts and the loop keeps going; only prompt failures
//! (terminal gone) end the session early.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::ads::{AdManager, SimSdk};
use crate::api::{Backend, BackendClient, GenerateNamesRequest, LogoRequest};
use crate::app::prompt;
use crate::cli::generate::split_keywords;
use crate::cli::logo::{image_file_name, print_description};
use crate::cli::output;
use crate::cli::saved::saved_table;
use crate::config::Config;
use crate::domain::{GenerationKind, Language};
use crate::error::{Error, Result};
use crate::screen::{DomainCheckScreen, HomeScreen, LogoScreen, SavedScreen, Translations};
use crate::store::{BackendSavedNames, LocalStore, SavedNameStore};

/// The interactive application.
pub struct App;

impl App {
    /// Run the interactive session until quit or ctrl-c.
    ///
    /// # Errors
    ///
    /// Fails when the store or the backend client cannot be constructed,
    /// or when the terminal stops answering prompts.
    pub async fn run(config: Config) -> Result<()> {
        let local = LocalStore::from_config(&config.store)?;
        let language = local.language().unwrap_or_default();

        let backend: Arc<dyn Backend> = Arc::new(BackendClient::from_config(&config.backend)?);
        let store: Arc<dyn SavedNameStore> = if config.store.remote_saved_names {
            info!("Saved names live on the backend this session");
            Arc::new(BackendSavedNames::new(backend.clone()))
        } else {
            Arc::new(local.clone())
        };

        let ads = if config.ads.enabled {
            let sdk = SimSdk::new(config.ads.sim.clone());
            let manager = Arc::new(AdManager::new(&sdk, &config.ads)?);
            info!(banner_unit = %manager.banner_unit(), "Ad runtime started");
            Some(manager)
        } else {
            info!("Ads disabled for this session");
            None
        };

        if let Some(ads) = &ads {
            schedule_app_open(
                ads.clone(),
                Duration::from_millis(config.ads.app_open_delay_ms),
            );
        }

        let mut session = Session::new(backend, store, local, ads, language);
        let outcome = tokio::select! {
            result = session.menu_loop() => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                Ok(())
            }
        };

        if let Some(ads) = &session.ads {
            ads.shutdown().await;
        }
        info!("Session ended");
        outcome
    }
}

/// The app-open ad waits out a startup delay before its one attempt.
fn schedule_app_open(ads: Arc<AdManager>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let shown = ads.show_app_open().await;
        debug!(shown, "Startup app-open attempt");
    });
}

/// One running menu session: the four screens plus device state.
struct Session {
    home: HomeScreen,
    saved: SavedScreen,
    domain: DomainCheckScreen,
    logo: LogoScreen,
    local: LocalStore,
    ads: Option<Arc<AdManager>>,
    language: Language,
}

impl Session {
    fn new(
        backend: Arc<dyn Backend>,
        store: Arc<dyn SavedNameStore>,
        local: LocalStore,
        ads: Option<Arc<AdManager>>,
        language: Language,
    ) -> Self {
        Self {
            home: HomeScreen::new(backend.clone(), store.clone(), ads.clone()),
            saved: SavedScreen::new(store),
            domain: DomainCheckScreen::new(backend.clone()),
            logo: LogoScreen::new(backend),
            local,
            ads,
            language,
        }
    }

    fn text(&self) -> &'static Translations {
        Translations::for_language(self.language)
    }

    async fn menu_loop(&mut self) -> Result<()> {
        loop {
            let text = self.text();
            let items = vec![
                text.menu_generate.to_string(),
                text.menu_saved.to_string(),
                text.menu_domain.to_string(),
                text.menu_logo.to_string(),
                text.menu_language.to_string(),
                text.menu_quit.to_string(),
            ];
            match prompt::select(text.app_title, &items).await? {
                0 => self.generate_flow().await?,
                1 => self.saved_flow().await?,
                2 => self.domain_flow().await?,
                3 => self.logo_flow().await?,
                4 => self.language_flow().await?,
                _ => break,
            }
            self.navigation_ad().await;
        }
        Ok(())
    }

    /// Leaving a screen is an interstitial moment; the gate decides
    /// whether anything actually shows.
    async fn navigation_ad(&self) {
        if let Some(ads) = &self.ads {
            let shown = ads.show_interstitial().await;
            debug!(shown, "Navigation interstitial attempt");
        }
    }

    fn report(&self, alert: &str, err: &Error) {
        warn!(error = %err, "Screen action failed");
        output::error(&format!("{alert}: {err}"));
    }

    async fn generate_flow(&mut self) -> Result<()> {
        let text = self.text();
        let language = self.language;

        let labels: Vec<String> = GenerationKind::ALL
            .iter()
            .map(|kind| kind.label(language).to_string())
            .collect();
        let kind = GenerationKind::ALL[prompt::select(text.prompt_kind, &labels).await?];

        let mut request = GenerateNamesRequest::new(kind, language);
        match kind {
            GenerationKind::Ai | GenerationKind::Abbreviated => {
                let raw = prompt::input(text.prompt_keywords).await?;
                request.keywords = split_keywords(&raw);
            }
            GenerationKind::Sector => {
                let sector = prompt::input(text.prompt_sector).await?;
                if !sector.is_empty() {
                    request.sector = Some(sector);
                }
            }
            GenerationKind::Geographic => {
                let location = prompt::input(text.prompt_location).await?;
                if !location.is_empty() {
                    request.location = Some(location);
                }
            }
            GenerationKind::Personality => {
                let personality = prompt::input(text.prompt_personality).await?;
                if !personality.is_empty() {
                    request.personality = Some(personality);
                }
            }
            GenerationKind::LengthBased => {
                let raw = prompt::input(text.prompt_length).await?;
                request.length = raw.parse().ok();
            }
            GenerationKind::Compound | GenerationKind::SmartRandom => {}
        }

        let spinner = output::spinner(text.menu_generate);
        let names: Vec<String> = match self.home.generate(&request).await {
            Ok(names) => {
                output::spinner_success(&spinner, text.menu_generate);
                names.to_vec()
            }
            Err(err) => {
                output::spinner_fail(&spinner, text.generation_failed);
                warn!(error = %err, "Name generation failed");
                return Ok(());
            }
        };

        if names.is_empty() {
            output::note(text.no_results);
            return Ok(());
        }
        for (index, name) in names.iter().enumerate() {
            output::field(&(index + 1).to_string(), name);
        }

        if prompt::confirm(text.prompt_save_choice).await? {
            let mut items = names.clone();
            items.push(text.skip.to_string());
            let choice = prompt::select(text.prompt_pick_name, &items).await?;
            if choice < names.len() {
                match self.home.save(choice).await {
                    Ok(Some(record)) => {
                        output::success(&format!("{}: {}", text.name_saved, record.name));
                    }
                    Ok(None) => {}
                    Err(err) => self.report(text.save_failed, &err),
                }
            }
        }
        Ok(())
    }

    async fn saved_flow(&mut self) -> Result<()> {
        let text = self.text();
        let names = match self.saved.list().await {
            Ok(names) => names,
            Err(err) => {
                self.report(text.load_failed, &err);
                return Ok(());
            }
        };
        if names.is_empty() {
            output::note(text.no_saved_names);
            return Ok(());
        }
        output::lines(&saved_table(&names));

        let mut items: Vec<String> = names.iter().map(|record| record.name.clone()).collect();
        items.push(text.back.to_string());
        let choice = prompt::select(text.prompt_pick_saved, &items).await?;
        let Some(record) = names.get(choice) else {
            return Ok(());
        };

        let actions = vec![
            text.action_favorite.to_string(),
            text.action_delete.to_string(),
            text.back.to_string(),
        ];
        match prompt::select(&record.name, &actions).await? {
            0 => match self.saved.toggle_favorite(&record.id).await {
                Ok(true) => output::success(text.favorite_added),
                Ok(false) => output::success(text.favorite_removed),
                Err(err) => self.report(text.not_found, &err),
            },
            1 => match self.saved.remove(&record.id).await {
                Ok(()) => output::success(text.name_deleted),
                Err(err) => self.report(text.not_found, &err),
            },
            _ => {}
        }
        Ok(())
    }

    async fn domain_flow(&mut self) -> Result<()> {
        let text = self.text();
        let name = prompt::input(text.prompt_domain_name).await?;
        if name.is_empty() {
            return Ok(());
        }

        let spinner = output::spinner(text.menu_domain);
        match self.domain.check(&name).await {
            Ok(check) => {
                output::spinner_success(&spinner, &check.domain_name);
                for row in &check.results {
                    let status = if row.available {
                        output::positive(text.available)
                    } else {
                        output::negative(text.taken)
                    };
                    match &row.price {
                        Some(price) => output::field(&row.domain, format!("{status}  {price}")),
                        None => output::field(&row.domain, status),
                    }
                }
            }
            Err(err) => {
                output::spinner_fail(&spinner, text.domain_check_failed);
                warn!(error = %err, "Domain check failed");
            }
        }
        Ok(())
    }

    async fn logo_flow(&mut self) -> Result<()> {
        let text = self.text();
        let company = prompt::input(text.prompt_company_name).await?;
        if company.is_empty() {
            return Ok(());
        }
        let request = LogoRequest::new(company);

        let spinner = output::spinner(text.menu_logo);
        let description = match self.logo.describe(&request).await {
            Ok(description) => {
                output::spinner_success(&spinner, &description.company_name);
                description
            }
            Err(err) => {
                output::spinner_fail(&spinner, text.logo_failed);
                warn!(error = %err, "Logo description failed");
                return Ok(());
            }
        };
        print_description(&description);

        if !prompt::confirm(text.prompt_render_image).await? {
            return Ok(());
        }

        // The image step is a rewarded moment; the outcome only changes
        // the message, never whether we render.
        if let Some(ads) = &self.ads {
            let earned = ads.show_rewarded().await;
            output::note(if earned {
                text.reward_earned
            } else {
                text.reward_skipped
            });
        }

        let spinner = output::spinner(text.menu_logo);
        match self.logo.render_image(&request).await {
            Ok(image) if image.result.success => match image.result.decoded_image() {
                Ok(Some(bytes)) => {
                    let path = image_file_name(&image.company_name);
                    match std::fs::write(&path, bytes) {
                        Ok(()) => output::spinner_success(
                            &spinner,
                            &format!("{} {}", text.logo_saved, path.display()),
                        ),
                        Err(err) => {
                            output::spinner_fail(&spinner, text.logo_failed);
                            warn!(error = %err, "Could not write the logo file");
                        }
                    }
                }
                Ok(None) => {
                    let url = image.result.image_url.as_deref().unwrap_or("-");
                    output::spinner_success(&spinner, url);
                }
                Err(err) => {
                    output::spinner_fail(&spinner, text.logo_failed);
                    warn!(error = %err, "Logo image did not decode");
                }
            },
            Ok(image) => {
                output::spinner_fail(&spinner, text.logo_failed);
                if let Some(fallback) = &image.result.fallback_description {
                    output::note(fallback);
                }
            }
            Err(err) => {
                output::spinner_fail(&spinner, text.logo_failed);
                warn!(error = %err, "Logo image request failed");
            }
        }
        Ok(())
    }

    async fn language_flow(&mut self) -> Result<()> {
        let text = self.text();
        let items = vec!["العربية".to_string(), "English".to_string()];
        let language = match prompt::select(text.menu_language, &items).await? {
            0 => Language::Ar,
            _ => Language::En,
        };
        if let Err(err) = self.local.set_language(language) {
            self.report(text.save_failed, &err);
            return Ok(());
        }
        self.language = language;
        output::success(self.text().language_updated);
        Ok(())
    }
}
