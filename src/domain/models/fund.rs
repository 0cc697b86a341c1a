// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// 基金搜索接口的响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundSearchResponse {
    pub data: FundPage,
}

/// 搜索结果分页数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundPage {
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<Fund>,
}

/// 基金实体
///
/// 外部接口返回的一条募集信息。只读，不整体持久化，
/// 仅 `id` 被记录到已通知表中。时间字段保持接口原样的字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fund {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "subtitle", deserialize_with = "null_as_default")]
    pub sub_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub limit_amount: i64,
    /// 利率，可能包含非数字写法（例如区间）
    #[serde(deserialize_with = "null_as_default")]
    pub rate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// 相对路径，以站点根地址拼接成详情链接
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub close_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub limit_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub raise_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_id: String,
}

impl Fund {
    /// 募集币种
    pub fn currency(&self) -> Currency {
        Currency::from_id(&self.currency_id)
    }

    /// 币种显示名
    pub fn currency_label(&self) -> &'static str {
        self.currency().label()
    }
}

/// 募集币种
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// 日元
    Jpy,
    /// 美元
    Usd,
    /// 澳元
    Aud,
    /// 未知代码
    Unknown,
}

impl Currency {
    /// 根据接口的 `currencyId` 解析币种，未识别的代码一律视为未知
    pub fn from_id(id: &str) -> Self {
        match id {
            "1" => Currency::Jpy,
            "2" => Currency::Usd,
            "3" => Currency::Aud,
            _ => Currency::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::Jpy => "日本円",
            Currency::Usd => "USドル",
            Currency::Aud => "AUドル",
            Currency::Unknown => "不明",
        }
    }
}
