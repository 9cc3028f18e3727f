use std::path;

use anyhow::Context as _;

use crate::error::Result;

/// Promote a static app into public/ and generate its nginx configuration
#[derive(Debug, clap::Parser)]
#[command(name = "staticfile-finalize", version, about)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) finalize: FinalizeArgs,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct FinalizeArgs {
    /// Build directory holding the application and its Staticfile
    #[arg(value_name = "BUILD_DIR", default_value = ".")]
    pub(crate) build_dir: path::PathBuf,

    /// Print the effective Staticfile settings and exit without changing anything
    #[arg(long)]
    pub(crate) dump_config: bool,
}

impl FinalizeArgs {
    pub(crate) fn run(&self) -> Result<()> {
        if !self.build_dir.is_dir() {
            anyhow::bail!("build directory `{}` does not exist", self.build_dir.display());
        }

        if self.dump_config {
            let loaded =
                staticfile_config::load(&self.build_dir, &staticfile_config::YamlReader)
                    .with_context(|| {
                        format!(
                            "failed to load {}",
                            self.build_dir.join(staticfile_config::STATICFILE).display()
                        )
                    })?;
            print!("{}", loaded.config);
            return Ok(());
        }

        let mut reporter = staticfile::LogReporter;
        let config = staticfile::finalize(&self.build_dir, &mut reporter)
            .map_err(|failed| anyhow::anyhow!("finalize failed during {}", failed.stage))?;
        log::debug!("Finalized with:\n{config}");
        log::info!("Finalize successful");

        Ok(())
    }
}
