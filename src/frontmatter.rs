//! Front matter and page header for the generated posts file.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::error::{Error, Result};

/// Template for everything above the first group heading.
const PAGE_HEADER_TEMPLATE: &str = "---
title : '{{ title }}'
date: {{ date }}
draft: {{ draft }}
---


## {{ header }}
__________
";

/// Values emitted at the top of the posts file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Page title, written single-quoted.
    pub title: String,
    /// Page date, written verbatim.
    pub date: String,
    /// Whether the page is a draft.
    pub draft: bool,
    /// Second-level heading shown above the groups.
    pub header: String,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: "Interesting posts".to_string(),
            date: "2023-01-25T14:42:15+05:30".to_string(),
            draft: false,
            header: "List of interesting blog posts and videos".to_string(),
        }
    }
}

impl FrontMatter {
    /// Render the front matter block, header line and separator.
    pub fn render(&self) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        let template = env
            .template_from_str(PAGE_HEADER_TEMPLATE)
            .map_err(|error| Error::TemplateRender {
                message: error.to_string(),
            })?;
        template
            .render(context! {
                title => single_quote_escape(&self.title),
                date => &self.date,
                draft => self.draft,
                header => &self.header,
            })
            .map_err(|error| Error::TemplateRender {
                message: error.to_string(),
            })
    }
}

/// Double single quotes so the title stays a valid YAML single-quoted scalar.
fn single_quote_escape(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::FrontMatter;

    #[test]
    fn renders_default_header() {
        let rendered = FrontMatter::default().render().expect("render");
        assert_eq!(
            rendered,
            "---\ntitle : 'Interesting posts'\ndate: 2023-01-25T14:42:15+05:30\ndraft: false\n---\n\n\n## List of interesting blog posts and videos\n__________\n"
        );
    }

    #[test]
    fn escapes_quotes_in_title() {
        let front_matter = FrontMatter {
            title: "Bob's links".to_string(),
            draft: true,
            ..FrontMatter::default()
        };
        let rendered = front_matter.render().expect("render");
        assert!(rendered.contains("title : 'Bob''s links'\n"));
        assert!(rendered.contains("draft: true\n"));
    }
}
