//! 页面渲染：产品列表页与编辑表单页

use std::fmt::Write;

use super::model::{Product, ProductForm};

/// 转义插入到 HTML 中的文本
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

/// 列表页
pub fn render_home(products: &[Product]) -> String {
    let mut body = String::new();

    if products.is_empty() {
        body.push_str("<p>No products yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Id</th><th>Name</th><th>Description</th><th>Price</th><th>Qty</th><th></th></tr>\n",
        );
        for product in products {
            // 写入 String 不会失败
            let _ = writeln!(
                body,
                r#"<tr><td>{id}</td><td>{name}</td><td>{description}</td><td>{price}</td><td>{qty}</td><td><a href="/update/{id}">Edit</a> <a href="/delete/{id}">Delete</a></td></tr>"#,
                id = product.id,
                name = escape_html(&product.name),
                description = escape_html(&product.description),
                price = product.price,
                qty = product.qty,
            );
        }
        body.push_str("</table>\n");
    }

    layout("Products", &body)
}

/// 编辑页，表单字段预填当前值
pub fn render_update(product: &Product) -> String {
    let form = ProductForm::from(product);
    let body = format!(
        r#"<form action="/update/{id}" method="POST">
<label>Name <input type="text" name="name" value="{name}"></label>
<label>Description <input type="text" name="description" value="{description}"></label>
<label>Price <input type="text" name="price" value="{price}"></label>
<label>Qty <input type="text" name="qty" value="{qty}"></label>
<button type="submit">Update</button>
</form>
<a href="/">Back</a>
"#,
        id = product.id,
        name = escape_html(&form.name),
        description = escape_html(&form.description),
        price = escape_html(&form.price),
        qty = escape_html(&form.qty),
    );

    layout("Update product", &body)
}
