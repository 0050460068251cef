use serde::{Deserialize, Serialize};

// structs and types

pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/xanadlzg";

// the contact form body, posted as-is to the form relay
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactReq {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactReq {
    // every field is required by the form
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

// messages

// post the form to the relay
//
// only the status matters: anything other than an ok response, including a
// transport failure, is an error.  the response body is never read on success
pub async fn send_contact(url: &str, req: &ContactReq) -> anyhow::Result<()> {
    let resp = gloo_net::http::Request::post(url)
        .header("Content-Type", "application/json")
        .json(req)?
        .send()
        .await?;

    if resp.ok() {
        Ok(())
    } else {
        Err(anyhow::Error::msg(format!(
            "relay returned {} {}",
            resp.status(),
            resp.status_text()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_has_the_four_relay_fields() {
        let req = ContactReq {
            name: String::from("Asha"),
            email: String::from("asha@example.com"),
            subject: String::from("Taproom"),
            message: String::from("When does it open?"),
        };

        let value = serde_json::to_value(&req).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&String> = object.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "message", "name", "subject"]);
    }

    #[test]
    fn blank_fields_are_incomplete() {
        let mut req = ContactReq {
            name: String::from("Asha"),
            email: String::from("asha@example.com"),
            subject: String::from("Taproom"),
            message: String::from("   "),
        };
        assert!(!req.is_complete());

        req.message = String::from("Hello");
        assert!(req.is_complete());
    }
}
