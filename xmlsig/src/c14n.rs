use std::{io::Write, path::PathBuf};

use clap::Parser;
use xmlsig_c14n::{Canonicalizer, Parameters, UnresolvedPrefix};

use crate::io::{open_output, read_input};

#[derive(Debug, Parser)]
pub(crate) struct C14n {
    /// input xml file (default stdin)
    pub(crate) infile: Option<PathBuf>,
    /// output file for the canonical bytes (default stdout)
    pub(crate) outfile: Option<PathBuf>,
    /// Print the identifier of the root element to stderr.
    #[arg(long)]
    pub(crate) print_id: bool,
    /// Don't look for an identifier on the root element.
    /// Cannot be combined with --print-id.
    #[arg(long, conflicts_with = "print_id")]
    pub(crate) no_id: bool,
    /// Write attributes whose namespace is not declared on their own
    /// element with an empty prefix instead of failing. The result is not
    /// well-formed XML, but matches what some older signers digest.
    #[arg(long)]
    pub(crate) empty_prefixes: bool,
}

impl C14n {
    pub(crate) fn parameters(&self) -> Parameters {
        Parameters {
            unresolved_prefix: if self.empty_prefixes {
                UnresolvedPrefix::Empty
            } else {
                UnresolvedPrefix::Fail
            },
            extract_id: !self.no_id,
        }
    }

    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut writer = open_output(self.outfile.as_deref())?;
        self.write(&mut writer, &mut std::io::stderr())
    }

    /// Write the canonical bytes to `writer` and, with --print-id, the
    /// identifier line to `id_writer`.
    pub(crate) fn write(
        &self,
        writer: &mut dyn Write,
        id_writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let xml = read_input(self.infile.as_deref())?;
        let canonical = Canonicalizer::new(self.parameters()).canonicalize(xml.as_str())?;
        log::debug!("canonical form is {} bytes", canonical.as_bytes().len());

        writer.write_all(canonical.as_bytes())?;
        writer.flush()?;

        if self.print_id {
            writeln!(id_writer, "{}", canonical.id())?;
        }
        Ok(())
    }
}
