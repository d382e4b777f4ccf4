use crate::error::{ThemeError, ThemeResult};
use std::collections::{BTreeMap, BTreeSet};

/// The presentation target a theme is written onto.
///
/// Implementations own a single global namespace of style variables on the
/// root of the target, the target's own inline properties and attributes,
/// and a set of identified style blocks.
pub trait StyleSink {
    /// Write a style variable (`--name`) on the root.
    fn set_variable(&mut self, name: &str, value: &str) -> ThemeResult<()>;

    /// Read a variable back as the target would compute it.
    fn variable(&self, name: &str) -> Option<String>;

    /// Write a plain style property directly, outside the variable namespace.
    fn set_inline(&mut self, property: &str, value: &str) -> ThemeResult<()>;

    fn inline(&self, property: &str) -> Option<String>;

    fn remove_inline(&mut self, property: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn remove_attribute(&mut self, name: &str);

    /// Insert the block with `id`, or replace its content if it exists.
    fn replace_style_block(&mut self, id: &str, content: &str) -> ThemeResult<()>;

    fn style_block(&self, id: &str) -> Option<String>;
}

/// In-memory target, used by tests and by hosts that render the result
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStyleSink {
    variables: BTreeMap<String, String>,
    inline: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    blocks: Vec<(String, String)>,
    rejected: BTreeSet<String>,
}

impl MemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write to `name` (variable or inline property) fail,
    /// simulating a host that refuses it.
    pub fn reject_writes_to(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn inline_properties(&self) -> &BTreeMap<String, String> {
        &self.inline
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Style blocks in insertion order.
    pub fn style_blocks(&self) -> &[(String, String)] {
        &self.blocks
    }

    pub fn clear(&mut self) {
        self.variables.clear();
        self.inline.clear();
        self.attributes.clear();
        self.blocks.clear();
    }

    fn check_writable(&self, name: &str) -> ThemeResult<()> {
        if self.rejected.contains(name) {
            return Err(ThemeError::application_failure(name, "write rejected by target"));
        }
        Ok(())
    }
}

impl StyleSink for MemoryStyleSink {
    fn set_variable(&mut self, name: &str, value: &str) -> ThemeResult<()> {
        self.check_writable(name)?;
        self.variables.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_inline(&mut self, property: &str, value: &str) -> ThemeResult<()> {
        self.check_writable(property)?;
        self.inline.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn inline(&self, property: &str) -> Option<String> {
        self.inline.get(property).cloned()
    }

    fn remove_inline(&mut self, property: &str) {
        self.inline.remove(property);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn replace_style_block(&mut self, id: &str, content: &str) -> ThemeResult<()> {
        self.check_writable(id)?;
        match self.blocks.iter().position(|(block_id, _)| block_id == id) {
            Some(index) => self.blocks[index].1 = content.to_string(),
            None => self.blocks.push((id.to_string(), content.to_string())),
        }
        Ok(())
    }

    fn style_block(&self, id: &str) -> Option<String> {
        self.blocks
            .iter()
            .find(|(block_id, _)| block_id == id)
            .map(|(_, content)| content.clone())
    }
}
