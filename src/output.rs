use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use crate::errors::ChefError;
use crate::models::ChannelTree;

/// Writes the tree as pretty JSON to `path`, or to stdout when no path is given.
pub fn write_tree(tree: &ChannelTree, path: Option<&Path>) -> Result<(), ChefError> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json(tree, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_json(tree, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(tree: &ChannelTree, writer: &mut W) -> Result<(), ChefError> {
    serde_json::to_writer_pretty(&mut *writer, tree)?;
    writeln!(writer)?;
    Ok(())
}
