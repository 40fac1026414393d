//! Draft state of the add article form.

use crate::{
    client::error::{validation::percent, ValidationError},
    model::article::{NewArticle, NewAuthor},
};

/// Earliest accepted publication year.
pub const MIN_YEAR: i32 = 1900;

pub static CREATE_FAILED: &str = "Failed to add the article. Please check the data and try again.";

/// One author row of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDraft {
    /// Stable identity of the row while authors are added and removed.
    pub key: u32,
    pub name: String,
    pub contribution: f64,
    pub applied_for_award: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm {
    pub title: String,
    pub year: Option<i32>,
    pub in_rinc: bool,
    pub authors: Vec<AuthorDraft>,
    next_key: u32,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: None,
            in_rinc: false,
            authors: vec![AuthorDraft {
                key: 0,
                name: String::new(),
                contribution: 100.0,
                applied_for_award: false,
            }],
            next_key: 1,
        }
    }
}

impl ArticleForm {
    pub fn add_author(&mut self) {
        self.authors.push(AuthorDraft {
            key: self.next_key,
            name: String::new(),
            contribution: 0.0,
            applied_for_award: false,
        });
        self.next_key += 1;
    }

    /// Removes the author row with `key`; the last remaining author cannot be removed.
    pub fn remove_author(&mut self, key: u32) {
        if self.authors.len() > 1 {
            self.authors.retain(|author| author.key != key);
        }
    }

    pub fn can_remove_author(&self) -> bool {
        self.authors.len() > 1
    }

    pub fn author_mut(&mut self, key: u32) -> Option<&mut AuthorDraft> {
        self.authors.iter_mut().find(|author| author.key == key)
    }

    /// Sets the year from a text input; anything unparseable clears it.
    pub fn set_year(&mut self, value: &str) {
        self.year = value.trim().parse().ok();
    }

    pub fn total_contribution(&self) -> f64 {
        self.authors.iter().map(|author| author.contribution).sum()
    }

    /// Running total rounded to two decimals for display.
    pub fn display_total(&self) -> f64 {
        percent(&self.total_contribution())
    }

    /// Checks the form and builds the create payload.
    pub fn validate(&self, current_year: i32) -> Result<NewArticle, ValidationError> {
        let Some(year) = self.year else {
            return Err(ValidationError::MissingFields);
        };
        if self.title.trim().is_empty()
            || self.authors.iter().any(|author| author.name.trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }

        let max = current_year + 1;
        if !(MIN_YEAR..=max).contains(&year) {
            return Err(ValidationError::YearOutOfRange { min: MIN_YEAR, max });
        }

        if self
            .authors
            .iter()
            .any(|author| !(0.0..=100.0).contains(&author.contribution))
        {
            return Err(ValidationError::ContributionOutOfRange);
        }

        let total = self.total_contribution();
        if (total - 100.0).abs() > f64::EPSILON * 100.0 {
            return Err(ValidationError::ContributionSum(total));
        }

        Ok(NewArticle {
            title: self.title.trim().to_string(),
            year_pub: year,
            in_rinc: self.in_rinc,
            authors: self
                .authors
                .iter()
                .map(|author| NewAuthor {
                    author_name: author.name.trim().to_string(),
                    contribution: author.contribution,
                    applied_for_award: author.applied_for_award,
                    award_applied_date: None,
                })
                .collect(),
        })
    }
}
