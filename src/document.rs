//! Grouped link lists parsed from and rendered to the posts file.
//!
//! Only two kinds of lines matter: `###` headings, which open a group, and
//! `- [` bullets, which belong to the most recent group. Everything else is
//! dropped on parse and regenerated from [`FrontMatter`] on render.

use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    frontmatter::FrontMatter,
    link::LINK_MARKER,
};

/// Prefix that marks a line as a group heading.
pub const HEADING_MARKER: &str = "###";

/// Group name used when none is given and for links before any heading.
pub const DEFAULT_GROUP: &str = "Default";

/// A heading and the link lines listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Full heading line, marker included.
    pub(crate) heading: String,
    /// Link lines in display order.
    pub(crate) links: Vec<String>,
}

impl Group {
    /// Create an empty group for a heading line.
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            links: Vec::new(),
        }
    }
}

/// Groups of a posts file in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsDocument {
    /// Groups with unique headings.
    groups: Vec<Group>,
}

/// Build the heading line for a raw group name.
pub fn heading_for(group_name: &str) -> String {
    format!("{HEADING_MARKER} {group_name}")
}

/// Read the raw contents of a posts file.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are errors.
pub fn read_posts(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|error| Error::PostsRead {
        path: path.to_path_buf(),
        source: error,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl PostsDocument {
    /// Parse posts file contents into groups.
    pub fn parse(contents: &str) -> Self {
        let mut document = Self::default();
        let mut current = heading_for(DEFAULT_GROUP);
        for line in contents.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.starts_with(HEADING_MARKER) {
                current = line.to_string();
            } else if line.starts_with(LINK_MARKER) {
                document.group_mut(&current).links.push(line.to_string());
            }
        }
        document
    }

    /// Append a link line to a group, creating the group if needed.
    pub fn append_link(&mut self, group_name: &str, link: impl Into<String>) {
        let heading = heading_for(group_name);
        self.group_mut(&heading).links.push(link.into());
    }

    /// Return the groups in render order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Find a group by its heading line.
    pub fn group(&self, heading: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.heading == heading)
    }

    /// Find a group by heading, appending an empty one when missing.
    fn group_mut(&mut self, heading: &str) -> &mut Group {
        let index = match self.groups.iter().position(|group| group.heading == heading) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(heading));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Render the full file: page header followed by each group.
    pub fn render(&self, front_matter: &FrontMatter) -> Result<String> {
        let mut output = front_matter.render()?;
        for group in &self.groups {
            output.push_str(&group.heading);
            output.push('\n');
            for link in &group.links {
                output.push_str(link);
                output.push('\n');
            }
            output.push_str("\n\n");
        }
        Ok(output)
    }

    /// Render and replace the posts file.
    pub fn write_to(&self, path: &Path, front_matter: &FrontMatter) -> Result<()> {
        let rendered = self.render(front_matter)?;
        fs::write(path, rendered).map_err(|error| Error::PostsWrite {
            path: path.to_path_buf(),
            source: error,
        })
    }
}
