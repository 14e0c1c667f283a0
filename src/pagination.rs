//! Pagination engine for Cisco Support API responses.
//!
//! The support APIs are page-oriented, with three incompatible cursor
//! conventions in the wild: a query-parameter cursor with camelCase or
//! snake_case naming, the EoX service's path-segment cursor, and the
//! returns-by-user endpoint's records-in-page advance rule. [`Pages`]
//! hides all of them behind one lazy, forward-only pull sequence.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::client::SupportClient;
use crate::error::Result;
use crate::response::{self, PageEnvelope};

/// Pagination metadata reported alongside a page of results.
///
/// One struct covers every wire casing in use across the API families
/// (`pageIndex`, `PageIndex`, `page_index`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page number (1-indexed).
    #[serde(alias = "pageIndex", alias = "PageIndex")]
    pub page_index: u32,

    /// Index of the final page.
    #[serde(alias = "lastIndex", alias = "LastIndex")]
    pub last_index: u32,

    /// Total records across all pages.
    #[serde(alias = "totalRecords", alias = "TotalRecords")]
    pub total_records: u32,

    /// Number of records on this page.
    #[serde(alias = "pageRecords", alias = "PageRecords")]
    pub page_records: u32,

    /// Page title, when the family reports one.
    #[serde(default)]
    pub title: Option<String>,

    /// Link to this page, when the family reports one.
    #[serde(default, alias = "selfLink")]
    pub self_link: Option<String>,
}

/// How the engine decides whether another page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceRule {
    /// Advance while `page_index < last_index`. The rule used by
    /// every family except returns-by-user.
    LastIndex,

    /// Advance while `page_index < page_records`. The returns-by-user
    /// endpoint compares the page index against the records-in-page
    /// count; preserved as observed rather than corrected.
    PageRecords,
}

impl AdvanceRule {
    pub(crate) fn more_pages(self, info: &PageInfo) -> bool {
        match self {
            AdvanceRule::LastIndex => info.page_index < info.last_index,
            AdvanceRule::PageRecords => info.page_index < info.page_records,
        }
    }
}

/// Where the page cursor lives in the request.
#[derive(Debug, Clone)]
pub(crate) enum RequestPath {
    /// Fixed path; the cursor travels as a query parameter named by
    /// the envelope's `PAGE_PARAM`.
    Fixed(String),

    /// The EoX convention: the cursor is a path segment between a
    /// fixed prefix and the request arguments.
    Indexed { prefix: String, suffix: String },
}

impl RequestPath {
    /// Resolve the concrete path and parameter list for one page.
    fn for_page(
        &self,
        page_param: &'static str,
        index: u32,
        base_params: &[(String, Option<String>)],
    ) -> (String, Vec<(String, Option<String>)>) {
        match self {
            RequestPath::Fixed(path) => {
                let mut params = base_params.to_vec();
                params.push((page_param.to_string(), Some(index.to_string())));
                (path.clone(), params)
            }
            RequestPath::Indexed { prefix, suffix } => (
                format!("{prefix}/{index}/{suffix}"),
                base_params.to_vec(),
            ),
        }
    }
}

/// A lazy, forward-only sequence of records spanning one or more
/// response pages.
///
/// A page is fetched only when the items already buffered are
/// exhausted and the consumer asks for more; abandoning the sequence
/// triggers no further requests. Items are yielded in server order
/// within a page, pages in increasing index order.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> ciscosupport::Result<()> {
/// let api = ciscosupport::CiscoSupport::from_env().await?;
///
/// let mut bugs = api.bug.get_bugs_by_keyword("IOS SSH PKI", &Default::default())?;
/// while let Some(bug) = bugs.try_next().await? {
///     println!("{}: {}", bug.bug_id, bug.headline);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pages<E: PageEnvelope> {
    client: SupportClient,
    path: RequestPath,
    params: Vec<(String, Option<String>)>,
    next_index: u32,
    buffer: VecDeque<E::Item>,
    exhausted: bool,
}

impl<E: PageEnvelope> std::fmt::Debug for Pages<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pages")
            .field("path", &self.path)
            .field("next_index", &self.next_index)
            .field("buffered", &self.buffer.len())
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<E: PageEnvelope> Pages<E> {
    pub(crate) fn new(
        client: SupportClient,
        path: RequestPath,
        params: Vec<(String, Option<String>)>,
    ) -> Self {
        Self {
            client,
            path,
            params,
            next_index: 1,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Pull the next record, fetching the next page if needed.
    ///
    /// Returns `Ok(None)` once the traversal is complete. A failed
    /// page fetch ends the traversal: the error is returned once and
    /// subsequent calls yield `Ok(None)`; records already yielded
    /// remain valid.
    pub async fn try_next(&mut self) -> Result<Option<E::Item>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }
            if let Err(err) = self.fetch_next_page().await {
                self.exhausted = true;
                return Err(err);
            }
        }
    }

    /// Drain the remaining records into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<E::Item>> {
        let mut all = Vec::new();
        while let Some(item) = self.try_next().await? {
            all.push(item);
        }
        Ok(all)
    }

    async fn fetch_next_page(&mut self) -> Result<()> {
        let (path, params) = self.path.for_page(E::PAGE_PARAM, self.next_index, &self.params);

        tracing::debug!(page = self.next_index, path = %path, "fetching page");

        let body = self.client.get_json(&path, &params).await?;
        let (items, info) = response::decode_page::<E>(body)?;

        match info {
            Some(info) if E::ADVANCE.more_pages(&info) => self.next_index += 1,
            // Absent metadata means the result is single-page.
            _ => self.exhausted = true,
        }

        self.buffer.extend(items);
        Ok(())
    }
}
