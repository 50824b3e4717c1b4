pub mod keyword_retriever;

pub use keyword_retriever::KeywordKnowledgeRetriever;
