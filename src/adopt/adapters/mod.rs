pub mod iam_role;
pub mod rest_api;
pub mod route53_zone;
pub mod s3_bucket;

pub use iam_role::IamRoleAdapter;
pub use rest_api::ApiGatewayRestApiAdapter;
pub use route53_zone::Route53ZoneAdapter;
pub use s3_bucket::S3BucketAdapter;
