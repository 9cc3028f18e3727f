use std::fmt;

use crate::error::*;

/// Liquid parser with the standard tags and filters only.
pub(crate) struct Liquid {
    parser: liquid::Parser,
}

impl Liquid {
    pub(crate) fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(Error::Template)?;
        Ok(Self { parser })
    }

    pub(crate) fn render<T: serde::Serialize>(&self, template: &str, context: &T) -> Result<String> {
        let template = self.parser.parse(template).map_err(Error::Template)?;
        let globals = liquid::to_object(context).map_err(Error::Template)?;
        template.render(&globals).map_err(Error::Template)
    }
}

impl fmt::Debug for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Liquid{{}}")
    }
}
