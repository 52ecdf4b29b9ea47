use crate::areas::session::Session;
use crate::artifacts::diff::diff_record::{DiffRecord, Side};
use crate::artifacts::filter::prune_filter::PruneFilter;
use derive_new::new;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

const INDENT: &str = "|  ";

#[derive(Debug, Clone, new)]
pub struct RenderOptions {
    pub legend: bool,
    pub prune: PruneFilter,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            legend: true,
            prune: PruneFilter::default(),
        }
    }
}

impl Session {
    /// Print the diff tree under `root`, one line per record
    pub fn render(&self, root: &DiffRecord, options: &RenderOptions) -> anyhow::Result<()> {
        if root.children.is_empty() {
            writeln!(self.writer(), "No differences.")?;
            return Ok(());
        }

        if options.legend {
            self.render_legend()?;
        }

        writeln!(self.writer(), "Diff:")?;
        self.render_record(root, Path::new(""), 0, options)?;
        self.writer().flush()?;

        Ok(())
    }

    fn render_legend(&self) -> anyhow::Result<()> {
        let sample = OsStr::new("foo");
        let entries = [
            (
                DiffRecord::missing(sample, Side::B),
                format!("exists only in {}", Side::A),
            ),
            (
                DiffRecord::missing(sample, Side::A),
                format!("exists only in {}", Side::B),
            ),
            (
                DiffRecord::type_mismatch(sample),
                "types differ (directory vs file)".to_string(),
            ),
            (
                DiffRecord::changed_leaf(sample),
                "contents differ".to_string(),
            ),
        ];

        write!(self.writer(), "Legend:")?;
        for (record, description) in entries {
            writeln!(self.writer(), "\t{} - {}", record.label(), description)?;
        }

        Ok(())
    }

    fn render_record(
        &self,
        record: &DiffRecord,
        relative: &Path,
        indent: usize,
        options: &RenderOptions,
    ) -> anyhow::Result<()> {
        let prefix = INDENT.repeat(indent);

        if !record.is_dir() {
            writeln!(self.writer(), "{prefix}{}", record.label())?;
            return Ok(());
        }

        // the synthetic root itself is never pruned
        if indent > 0 && options.prune.should_prune(record, relative) {
            writeln!(self.writer(), "{prefix}{} (not descending)", record.label())?;
            return Ok(());
        }

        writeln!(self.writer(), "{prefix}{}:", record.label())?;
        for child in &record.children {
            self.render_record(child, &relative.join(&child.name), indent + 1, options)?;
        }

        Ok(())
    }
}
