use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, anyhow, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        Bounds, Catalog, LocaleIndex, MessageId, SignatureDeclarations, Verifier,
        parsers::json::{parse_signature_file, scan_message_files},
    },
    issues::ParseErrorIssue,
};

/// Everything a check needs: resolved configuration and loaded files.
///
/// Construction order:
/// 1. Load `.catalintrc.json` from the root (or defaults)
/// 2. Apply CLI overrides
/// 3. Load message files and the signature file in parallel
/// 4. Fix the locale order and the id range
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
    catalog: Catalog,
    signatures: SignatureDeclarations,
    max_id: MessageId,
    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Messages directory doesn't exist
    /// - Primary locale messages are not found
    /// - Signature file is missing or not a JSON object
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --root arg > current directory
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .catalintrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        // CLI > config file > defaults
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }
        if let Some(ref messages_root) = common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if let Some(ref signatures) = common_args.signatures {
            config.signatures_file = signatures.to_string_lossy().to_string();
        }
        if common_args.max_id.is_some() {
            config.max_id = common_args.max_id;
        }
        if common_args.fail_fast {
            config.fail_fast = true;
        }
        if let Some(policy) = common_args.missing_locales {
            config.missing_locales = policy;
        }
        config.validate()?;

        let message_dir = resolve_path(&root_dir, &config.messages_root);
        let signature_path = resolve_path(&root_dir, &config.signatures_file);

        if !signature_path.is_file() {
            bail!(
                "Signature file '{}' does not exist.\n\
                 Hint: Check your .catalintrc.json 'signaturesFile' setting.",
                signature_path.display()
            );
        }

        let (scan_message_result, scan_signature_result) = rayon::join(
            || scan_message_files(&message_dir),
            || parse_signature_file(&signature_path),
        );

        let scan_messages = scan_message_result?;
        let scan_signatures = scan_signature_result.with_context(|| {
            format!(
                "Failed to load signature file '{}'",
                signature_path.display()
            )
        })?;

        if !scan_messages.messages.contains_key(&config.primary_locale) {
            return Err(anyhow!(
                "Primary locale '{}' messages not found in '{}'",
                config.primary_locale,
                message_dir.display()
            ));
        }

        let parse_errors = scan_messages
            .warnings
            .iter()
            .chain(&scan_signatures.warnings)
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path.clone(),
                error: warning.error.clone(),
            })
            .collect();

        let order = locale_order(&config, scan_messages.messages.keys());
        let ignored: Vec<&str> = scan_messages
            .messages
            .keys()
            .filter(|locale| !order.contains(locale))
            .map(String::as_str)
            .collect();
        if !ignored.is_empty() {
            let mut ignored = ignored;
            ignored.sort_unstable();
            eprintln!(
                "Warning: locale file(s) not listed in 'locales' are ignored: {}",
                ignored.join(", ")
            );
        }

        let catalog = Catalog::new(order, scan_messages.messages);
        let signatures = scan_signatures.declarations;

        let max_id = config.max_id.unwrap_or_else(|| {
            let catalog_max = catalog.ids().last().copied();
            let signature_max = signatures.ids().max();
            catalog_max.max(signature_max).unwrap_or(0)
        });

        if verbose {
            eprintln!(
                "Note: {} locale(s) ({} file(s) loaded), {} signature(s), ids 1..={}",
                catalog.locale_count(),
                catalog.loaded_file_count(),
                signatures.len(),
                max_id
            );
        }

        Ok(Self {
            config,
            root_dir,
            verbose,
            catalog,
            signatures,
            max_id,
            parse_errors,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn signatures(&self) -> &SignatureDeclarations {
        &self.signatures
    }

    /// MAX_ID for this run.
    pub fn max_id(&self) -> MessageId {
        self.max_id
    }

    /// MAX_LOCALE for this run.
    pub fn max_locale(&self) -> LocaleIndex {
        self.catalog.locale_count()
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    /// Verifier over the loaded files with the configured policies.
    pub fn verifier(&self) -> Verifier<'_> {
        Verifier::new(
            &self.catalog,
            &self.signatures,
            Bounds::new(self.max_id, self.max_locale()),
        )
        .with_failure_policy(self.config.failure_policy())
        .with_missing_locales(self.config.missing_locales)
    }

    /// Resolve the messages directory path relative to root_dir.
    pub fn resolved_messages_dir(&self) -> PathBuf {
        resolve_path(&self.root_dir, &self.config.messages_root)
    }
}

/// Resolve a configured path against the root directory.
///
/// With the current directory as root the configured path is kept as is, so
/// output shows `./messages/de.json` rather than `././messages/de.json`.
pub fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}

/// Locale order: the configured list, or the primary locale followed by the
/// other discovered locales alphabetically.
pub fn locale_order<'a>(
    config: &Config,
    discovered: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    if !config.locales.is_empty() {
        return config.locales.clone();
    }

    let mut others: Vec<String> = discovered
        .into_iter()
        .filter(|locale| **locale != config.primary_locale)
        .cloned()
        .collect();
    others.sort();

    let mut order = Vec::with_capacity(others.len() + 1);
    order.push(config.primary_locale.clone());
    order.extend(others);
    order
}
