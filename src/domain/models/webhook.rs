// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::fund::Fund;
use serde::{Deserialize, Serialize};

/// Slack Incoming Webhook 消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

/// 消息附件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub title: String,
    pub title_link: String,
    pub text: String,
    /// 需要按 mrkdwn 渲染的字段名
    pub mrkdwn_in: Vec<String>,
    pub fields: Vec<AttachmentField>,
}

/// 附件中的键值字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl AttachmentField {
    fn short(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            short: true,
        }
    }
}

impl WebhookMessage {
    /// 构建新基金的通知消息
    ///
    /// # 参数
    ///
    /// * `fund` - 新发现的基金
    /// * `base_url` - 站点根地址，与基金的相对路径拼接成详情链接
    ///
    /// # 返回值
    ///
    /// 正文为基金名称，附带一个包含七个固定顺序字段的附件
    pub fn for_fund(fund: &Fund, base_url: &str) -> Self {
        let fields = vec![
            AttachmentField::short("地域", fund.region_name.as_str()),
            AttachmentField::short("プロジェクト", fund.project_name.as_str()),
            AttachmentField::short("募集開始日", fund.open_time.as_str()),
            AttachmentField::short("募集終了日", fund.close_time.as_str()),
            AttachmentField::short("利率", format!("{}%", fund.rate)),
            AttachmentField::short("募集方法", fund.raise_method.as_str()),
            AttachmentField::short("通貨", fund.currency_label()),
        ];

        Self {
            text: fund.name.clone(),
            attachments: vec![Attachment {
                title: fund.sub_title.clone(),
                title_link: format!("{}{}", base_url, fund.url),
                text: fund.description.clone(),
                mrkdwn_in: vec!["text".to_string()],
                fields,
            }],
        }
    }
}
