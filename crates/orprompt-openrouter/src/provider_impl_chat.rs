use std::{future::Future, pin::Pin, sync::Arc};

use orprompt_core::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{OpenRouterAdapter, api_v1::ChatCompletionRequest};

impl ChatCompletionProvider for OpenRouterAdapter {
    fn chat_complete<'p>(
        &'p self,
        params: ChatCompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);
            let response = client.chat_completion(&request).await?;
            Ok(response.into_generic()?)
        })
    }
}
