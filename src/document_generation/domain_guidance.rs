/// Considerations listed in the Product Overview for a project domain.
///
/// Matching is case-insensitive on the trimmed domain name; unknown or
/// missing domains get the generic list.
pub fn domain_considerations(domain: Option<&str>) -> &'static [&'static str] {
    let domain = domain.map(|d| d.trim().to_lowercase()).unwrap_or_default();

    match domain.as_str() {
        "fintech" | "finance" | "banking" => &[
            "Include compliance and regulatory requirements",
            "Specify security and data protection measures",
            "Define audit trail requirements",
            "Consider multi-currency and localization needs",
        ],
        "healthcare" | "health" => &[
            "Ensure HIPAA compliance considerations",
            "Include patient privacy and data security",
            "Specify clinical workflow integration",
            "Consider accessibility for diverse patient populations",
        ],
        "e-commerce" | "ecommerce" | "retail" => &[
            "Include payment processing requirements",
            "Specify inventory management integration",
            "Define user account and profile management",
            "Consider multi-platform consistency",
        ],
        "saas" => &[
            "Include multi-tenant considerations",
            "Specify subscription and billing requirements",
            "Define user role and permission management",
            "Consider scalability and performance requirements",
        ],
        "mobile" => &[
            "Consider touch interactions and small-screen layouts",
            "Define offline functionality and sync behaviour",
            "Specify performance and battery constraints",
        ],
        "web" => &[
            "Define browser compatibility targets",
            "Specify responsive design breakpoints",
            "Include accessibility requirements",
        ],
        "api" => &[
            "Define rate limiting and quota policies",
            "Specify authentication and authorization schemes",
            "Document error handling and status codes",
        ],
        _ => &[
            "Consider industry-specific compliance requirements",
            "Include relevant integration points",
            "Define appropriate user roles and permissions",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_domain_is_case_insensitive() {
        let guidance = domain_considerations(Some("  FinTech "));
        assert!(guidance[0].contains("compliance and regulatory"));
    }

    #[test]
    fn test_unknown_and_missing_domain_fall_back() {
        assert_eq!(
            domain_considerations(Some("agriculture")),
            domain_considerations(None)
        );
        assert_eq!(domain_considerations(None).len(), 3);
    }
}
