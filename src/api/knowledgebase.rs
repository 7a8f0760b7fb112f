// src/api/knowledgebase.rs
//! Knowledge base documents: upload, browse, categorise, query

use reqwest::multipart::Form;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

use crate::api::resume::file_part;
use crate::config::ClientConfig;
use crate::core::{Endpoint, Result, ServiceClient};
use crate::types::knowledgebase::CategoryUpdate;
use crate::types::{KnowledgeBaseItem, QueryRequest, QueryResponse};
use crate::utils;

const KNOWLEDGEBASE_ENDPOINT: &str = "/api/knowledgebase";
const UPLOAD_ENDPOINT: &str = "/api/knowledgebase/upload";
const LIST_ENDPOINT: &str = "/api/knowledgebase/list";
const QUERY_ENDPOINT: &str = "/api/knowledgebase/query";
const CATEGORIES_ENDPOINT: &str = "/api/knowledgebase/categories";
const CATEGORY_ENDPOINT: &str = "/api/knowledgebase/category";
const UNCATEGORIZED_ENDPOINT: &str = "/api/knowledgebase/uncategorized";
const SEARCH_ENDPOINT: &str = "/api/knowledgebase/search";

#[derive(Debug, Clone)]
pub struct KnowledgeBaseApi {
    service: ServiceClient,
}

impl KnowledgeBaseApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let service = ServiceClient::new(&config.parsed_base_url()?, config.knowledgebase_timeout)?;
        Ok(Self { service })
    }

    /// Upload a document; `name` and `category` are optional form fields
    pub async fn upload(
        &self,
        file_path: &Path,
        name: Option<&str>,
        category: Option<&str>,
    ) -> Result<Map<String, Value>> {
        let file_name = utils::upload_file_name(file_path)?;
        utils::content_type_for(&file_name)?;
        let content = utils::read_file_bytes(file_path).await?;

        let mut form = Form::new().part("file", file_part(&file_name, content)?);
        if let Some(name) = name {
            form = form.text("name", name.to_string());
        }
        if let Some(category) = category {
            form = form.text("category", category.to_string());
        }

        info!("Uploading knowledge base document {}", file_name);
        self.service
            .post_multipart(&Endpoint::new(UPLOAD_ENDPOINT), form)
            .await
    }

    /// All knowledge bases, optionally sorted server-side
    pub async fn list(&self, sort_by: Option<&str>) -> Result<Vec<KnowledgeBaseItem>> {
        let endpoint = Endpoint::new(LIST_ENDPOINT);
        match sort_by.filter(|s| !s.trim().is_empty()) {
            Some(sort_by) => {
                self.service
                    .get_with_query(&endpoint, &[("sortBy", sort_by)])
                    .await
            }
            None => self.service.get(&endpoint).await,
        }
    }

    pub async fn get(&self, id: i64) -> Result<KnowledgeBaseItem> {
        self.service
            .get(&Endpoint::new(KNOWLEDGEBASE_ENDPOINT).push(id))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        info!("Deleting knowledge base {}", id);
        self.service
            .delete(&Endpoint::new(KNOWLEDGEBASE_ENDPOINT).push(id))
            .await
    }

    /// Ask a question answered from one or more knowledge bases
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.service
            .post_json(&Endpoint::new(QUERY_ENDPOINT), request)
            .await
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        self.service.get(&Endpoint::new(CATEGORIES_ENDPOINT)).await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<KnowledgeBaseItem>> {
        self.service
            .get(&Endpoint::new(CATEGORY_ENDPOINT).push(category))
            .await
    }

    pub async fn list_uncategorized(&self) -> Result<Vec<KnowledgeBaseItem>> {
        self.service.get(&Endpoint::new(UNCATEGORIZED_ENDPOINT)).await
    }

    /// `None` clears the category
    pub async fn update_category(&self, id: i64, category: Option<&str>) -> Result<()> {
        let update = CategoryUpdate {
            category: category.map(str::to_string),
        };
        self.service
            .put_json(
                &Endpoint::new(KNOWLEDGEBASE_ENDPOINT).push(id).push("category"),
                &update,
            )
            .await
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<KnowledgeBaseItem>> {
        self.service
            .get_with_query(&Endpoint::new(SEARCH_ENDPOINT), &[("keyword", keyword)])
            .await
    }
}
