pub mod api {
    use serde::{Deserialize, Serialize};

    pub type MenuId = u32;

    /// A single dish as served by the menu backend. Immutable once fetched.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MenuItem {
        pub id: MenuId,
        pub name: String,
        pub price: f64,
        #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
        pub image_url: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct MenuResponse {
        pub items: Vec<MenuItem>,
    }

    /// Body of `POST /order`. Ids may repeat, once per helping.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct OrderRequest {
        #[serde(rename = "menuIds")]
        pub menu_ids: Vec<MenuId>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct OrderResponse {
        #[serde(rename = "prepTime")]
        pub prep_time: u32,
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{MenuItem, OrderRequest, OrderResponse};

    #[test]
    fn menu_item_decodes_backend_field_names() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":7,"name":"Pancakes","price":5.99,"imageURL":"http://localhost:8080/images/7.png"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Pancakes");
        assert_eq!(
            item.image_url.as_deref(),
            Some("http://localhost:8080/images/7.png")
        );
    }

    #[test]
    fn menu_item_image_is_optional() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":2,"name":"Coffee","price":2.5}"#).unwrap();
        assert_eq!(item.image_url, None);
    }

    #[test]
    fn order_request_keeps_duplicates_and_wire_name() {
        let body = serde_json::to_string(&OrderRequest {
            menu_ids: vec![3, 5, 5],
        })
        .unwrap();
        assert_eq!(body, r#"{"menuIds":[3,5,5]}"#);
    }

    #[test]
    fn order_response_reads_prep_time() {
        let response: OrderResponse = serde_json::from_str(r#"{"prepTime":27}"#).unwrap();
        assert_eq!(response.prep_time, 27);
    }
}
