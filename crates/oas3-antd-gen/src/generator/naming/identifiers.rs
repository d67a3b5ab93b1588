use std::{
  char::{ToLowercase, ToUppercase},
  iter::Peekable,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use regex::Regex;

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Suffixes trimmed from the application name, in order.
const APP_NAME_SUFFIXES: [&[&str]; 3] = [&["Test"], &["API", "Api"], &["Test"]];

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Splits a PascalCase string into words.
/// Handles adjacent uppercase letters correctly (e.g., `"XMLParser"` -> `["XML", "Parser"]`).
pub(crate) fn split_pascal_case(name: &str) -> Vec<String> {
  if name.is_empty() {
    return vec![];
  }

  let mut words = vec![];
  let mut current_word = String::new();
  let chars: Vec<char> = name.chars().collect();

  for (i, &ch) in chars.iter().enumerate() {
    if ch.is_uppercase() && !current_word.is_empty() {
      let prev_is_lower = i > 0 && chars[i - 1].is_lowercase();
      let next_is_lower = i + 1 < chars.len() && chars[i + 1].is_lowercase();

      if prev_is_lower || next_is_lower {
        words.push(std::mem::take(&mut current_word));
      }
    }
    current_word.push(ch);
  }

  if !current_word.is_empty() {
    words.push(current_word);
  }

  words
}

/// Converts a name into its `PascalCase` form, the "title case" used for group
/// directories and package names.
///
/// # Rules:
/// 1. Mixed-case input without separators keeps its capitalization (`WidgetFilter`).
/// 2. Otherwise words are split on separators and case boundaries and each word is
///    capitalized (`store-item` -> `StoreItem`, `NOT_FOUND` -> `NotFound`).
/// 3. Characters that are not ASCII alphanumerics are dropped.
/// 4. Empty input stays empty, so the default model bucket keeps its empty key.
pub(crate) fn title_case(name: &str) -> String {
  let trimmed = name.trim();
  let has_separators = trimmed.contains(['-', '_', '.', ' ', ':', '/']);
  let has_upper = trimmed.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = trimmed.chars().any(|c| c.is_ascii_lowercase());

  let ascii = any_ascii(trimmed);

  if !has_separators && has_upper && has_lower {
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut chars = cleaned.chars();
    return match chars.next() {
      None => String::new(),
      Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    };
  }

  ascii
    .chars()
    .capitalize_words_with_boundaries()
    .filter(char::is_ascii_alphanumeric)
    .collect()
}

/// Pluralizes the last word of a `PascalCase` name using English count-noun rules.
///
/// A capitalized last word is inflected in lower case and re-capitalized so that
/// irregular nouns resolve through the lower-case inflection rules; acronyms are inflected as-is.
pub(crate) fn pluralize(name: &str) -> String {
  let mut words = split_pascal_case(name);
  let Some(last) = words.pop() else {
    return String::new();
  };

  let plural = if is_capitalized_word(&last) {
    capitalize_first(&cruet::to_plural(&last.to_lowercase()))
  } else {
    cruet::to_plural(&last)
  };

  words.push(plural);
  words.concat()
}

fn is_capitalized_word(word: &str) -> bool {
  let mut chars = word.chars();
  chars.next().is_some_and(char::is_uppercase) && chars.all(|c| !c.is_uppercase())
}

fn capitalize_first(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// Removes the first case-insensitive occurrence of `app_name` from `name`.
///
/// ```text
/// ("AppWidgetFilter", "App") => "WidgetFilter"
/// ("appWidget", "App")       => "Widget"
/// ```
pub(crate) fn strip_app_name(name: &str, app_name: &str) -> String {
  if app_name.is_empty() {
    return name.to_string();
  }

  let haystack = name.to_ascii_lowercase();
  let needle = app_name.to_ascii_lowercase();

  match haystack.find(&needle) {
    Some(start) => format!("{}{}", &name[..start], &name[start + needle.len()..]),
    None => name.to_string(),
  }
}

/// Derives the application name from an explicit override, the spec title, or a fallback.
///
/// The chosen name is title-cased and the `Test`, `API`, `Test` suffixes are trimmed in
/// that order. If trimming leaves nothing, the untrimmed name is kept.
pub(crate) fn app_name_or_default(name: Option<&str>, title: Option<&str>, default: &str) -> String {
  let chosen = [name, title]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|candidate| !candidate.is_empty())
    .unwrap_or(default);

  let pascal = title_case(chosen);
  let mut trimmed = pascal.as_str();
  for suffixes in APP_NAME_SUFFIXES {
    if let Some(rest) = suffixes.iter().find_map(|suffix| trimmed.strip_suffix(suffix)) {
      trimmed = rest;
    }
  }

  if trimmed.is_empty() {
    pascal
  } else {
    trimmed.to_string()
  }
}

/// Generates an identifier for operations that do not declare an `operationId`.
///
/// ```text
/// ("GET", "/widgets/{id}") => "get_widgets_by_id"
/// ```
pub(crate) fn generate_operation_id<S>(method: S, path: S) -> String
where
  S: AsRef<str>,
{
  let path_parts = path
    .as_ref()
    .split('/')
    .filter(|s| !s.is_empty())
    .map(|s| {
      if s.starts_with('{') && s.ends_with('}') {
        "by_id"
      } else {
        s
      }
    })
    .collect::<Vec<_>>();

  if path_parts.is_empty() {
    method.as_ref().to_lowercase()
  } else {
    format!("{}_{}", method.as_ref(), path_parts.join("_")).to_lowercase()
  }
}

/// An extension trait for char iterators to add word capitalization.
pub trait CapitalizeWordsExt: Iterator<Item = char> {
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized,
  {
    CapitalizeWordsWithBoundaries {
      iter: self.peekable(),
      capitalize_next: true,
      prev_was_lower: false,
      pending_upper: None,
      pending_lower: None,
    }
  }
}

pub struct CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  iter: Peekable<I>,
  capitalize_next: bool,
  prev_was_lower: bool,
  pending_upper: Option<ToUppercase>,
  pending_lower: Option<ToLowercase>,
}

impl<I> Iterator for CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(ref mut upper_iter) = self.pending_upper {
      if let Some(c) = upper_iter.next() {
        return Some(c);
      }
      self.pending_upper = None;
    }

    if let Some(ref mut lower_iter) = self.pending_lower {
      if let Some(c) = lower_iter.next() {
        return Some(c);
      }
      self.pending_lower = None;
    }

    let c = self.iter.next()?;

    if !c.is_ascii_alphanumeric() {
      self.capitalize_next = self.iter.peek().is_some_and(char::is_ascii_alphanumeric);
      self.prev_was_lower = false;
      return Some(c);
    }

    let is_lower = c.is_ascii_lowercase();
    let is_upper = c.is_ascii_uppercase();

    let should_capitalize = self.capitalize_next
      || (self.prev_was_lower && is_upper)
      || (is_upper && self.iter.peek().is_some_and(char::is_ascii_lowercase));

    self.prev_was_lower = is_lower;
    self.capitalize_next = false;

    let mut cased = if should_capitalize {
      CaseIter::Upper(c.to_uppercase())
    } else {
      CaseIter::Lower(c.to_lowercase())
    };
    let first = cased.next();
    match cased {
      CaseIter::Upper(rest) => self.pending_upper = Some(rest),
      CaseIter::Lower(rest) => self.pending_lower = Some(rest),
    }
    first
  }
}

enum CaseIter {
  Upper(ToUppercase),
  Lower(ToLowercase),
}

impl Iterator for CaseIter {
  type Item = char;

  fn next(&mut self) -> Option<char> {
    match self {
      Self::Upper(iter) => iter.next(),
      Self::Lower(iter) => iter.next(),
    }
  }
}
