//! 解析サービスへのHTTP送信（reqwest）
//!
//! `POST {base}/analyze` に `image` フィールド1つのマルチパートを送る。
//! リトライはしない。タイムアウトは設定されている場合のみ。

use crate::error::{EstimatorError, Result};
use crate::image_file::ImageFile;
use food_estimator_common::{
    analyze_url, decode_response, AnalysisClient, AnalysisError, AnalysisResult, IMAGE_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::error::Error as _;
use std::time::Duration;

pub struct HttpAnalysisClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAnalysisClient {
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = analyze_url(base)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EstimatorError::Http(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_form(image: &ImageFile) -> std::result::Result<Form, AnalysisError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| AnalysisError::RequestFailed(describe(&e)))?;
        Ok(Form::new().part(IMAGE_FIELD, part))
    }
}

impl AnalysisClient<ImageFile> for HttpAnalysisClient {
    async fn analyze(&self, image: &ImageFile) -> std::result::Result<AnalysisResult, AnalysisError> {
        let form = Self::build_form(image)?;

        tracing::debug!("POST {} ({} bytes, {})", self.url, image.bytes.len(), image.mime_type);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::RequestFailed(describe(&e)))?;

        tracing::debug!("レスポンス: status={} body={} chars", status, body.len());

        decode_response(status, &body)
    }
}

/// reqwestのエラーは原因が source 側にあるので連結する
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
