use std::path::PathBuf;

use clap::Parser;
use xmlsig_c14n::Canonicalizer;

use crate::io::read_input;

#[derive(Debug, Parser)]
pub(crate) struct Id {
    /// input xml file (default stdin)
    infile: Option<PathBuf>,
}

impl Id {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        println!("{}", self.identifier()?);
        Ok(())
    }

    pub(crate) fn identifier(&self) -> anyhow::Result<String> {
        let xml = read_input(self.infile.as_deref())?;
        // the id is only known once the document canonicalized cleanly
        let canonical = Canonicalizer::default().canonicalize(xml.as_str())?;
        if canonical.id().is_empty() {
            return Err(anyhow::anyhow!("Root element has no identifier attribute"));
        }
        Ok(canonical.id().to_string())
    }
}
