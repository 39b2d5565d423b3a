//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品记录
///
/// 序列化字段顺序固定为 `id, name, description, price, qty`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// 创建/更新请求体，四个字段都必须提供（整体覆盖，不做合并）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// 编辑页提交的表单，数值字段以字符串形式到达
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub qty: String,
}

/// 表单数值解析错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("字段 {field} 不是有效的数值: {value:?}")]
pub struct InvalidNumericFormat {
    pub field: &'static str,
    pub value: String,
}

impl TryFrom<ProductForm> for ProductInput {
    type Error = InvalidNumericFormat;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        let price = form
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| InvalidNumericFormat {
                field: "price",
                value: form.price.clone(),
            })?;
        let qty = form
            .qty
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidNumericFormat {
                field: "qty",
                value: form.qty.clone(),
            })?;

        Ok(ProductInput {
            name: form.name,
            description: form.description,
            price,
            qty,
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            qty: product.qty.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, qty: &str) -> ProductForm {
        ProductForm {
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: price.to_string(),
            qty: qty.to_string(),
        }
    }

    #[test]
    fn test_serialized_field_order() {
        let product = Product {
            id: 1,
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            qty: 100,
        };
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":1,"name":"Pen","description":"Blue pen","price":1.5,"qty":100}"#
        );
    }

    #[test]
    fn test_input_requires_every_field() {
        let err = serde_json::from_str::<ProductInput>(r#"{"name":"Pen","price":1.5,"qty":1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_form_numeric_parsing() {
        let input = ProductInput::try_from(form(" 2.25 ", "-4")).unwrap();
        assert_eq!(input.price, 2.25);
        assert_eq!(input.qty, -4);

        let err = ProductInput::try_from(form("cheap", "1")).unwrap_err();
        assert_eq!(err.field, "price");
        assert_eq!(err.value, "cheap");

        let err = ProductInput::try_from(form("1", "1.5")).unwrap_err();
        assert_eq!(err.field, "qty");

        assert!(ProductInput::try_from(form("NaN", "1")).is_err());
    }
}
